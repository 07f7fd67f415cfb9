#![allow(clippy::print_stdout, reason = "the plan and fatal diagnostics are written to stdout")]
use crate::cli::Args;
use anyhow::Context;
use clap::Parser;
use konverter::{
    CompileReport, Configuration, HandoffError, MappingText, Pipeline, PlanConsumer, PlanText,
    RunOptions,
};
use std::fs;
use std::io::{self, stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match compile(&Args::parse()) {
        Ok(report) => {
            info!(
                sub_graphs = report.sub_graphs,
                expressions = report.expressions,
                "Compiled mapping"
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            // Diagnostics share stdout with the plan.
            println!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

fn compile(args: &Args) -> anyhow::Result<CompileReport> {
    let config = Configuration::new(args.run_options())
        .context("Failed to initialize the mapping engines")?;
    let mapping = MappingText::from_path(&args.mapping)?;
    let mut writer = PlanWriter {
        target: args.emit_plan.clone(),
    };
    Ok(Pipeline::new(&config).run(&mapping, &mut writer)?)
}

/// Writes the plan to a file or to stdout.
struct PlanWriter {
    target: Option<PathBuf>,
}

impl PlanConsumer for PlanWriter {
    fn consume(&mut self, plan: &PlanText, options: &RunOptions) -> Result<(), HandoffError> {
        debug!(
            output = %options.output_path.display(),
            continue_on_error = options.continue_on_error,
            threading = options.threading_enabled,
            const_folding = options.materialize_constants,
            ordering = options.heuristic_ordering,
            "Handing off plan"
        );
        if let Some(path) = &self.target {
            fs::write(path, plan.as_str())?;
        } else {
            let mut out = stdout().lock();
            out.write_all(plan.as_str().as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn, reason = "tests")]
mod tests {
    use super::*;
    use anyhow::Result;
    use assert_cmd::Command;
    use assert_fs::prelude::*;
    use assert_fs::NamedTempFile;
    use predicates::prelude::*;

    const STUDENT_MAPPING: &str = "@prefix rr: <http://www.w3.org/ns/r2rml#> .
@prefix rml: <http://semweb.mmlab.be/ns/rml#> .
@prefix ex: <http://example.com/> .

<#TriplesMap1> a rr:TriplesMap ;
    rml:logicalSource [ rml:source \"student.csv\" ] ;
    rr:subjectMap [ rr:template \"http://example.com/{Name}\" ] ;
    rr:predicateObjectMap [
        rr:predicate ex:name ;
        rr:objectMap [ rml:reference \"Name\" ]
    ] .
";

    const STUDENT_PLAN: &str = "pi[create(http://example.com/{Name},template,iri) -> S,create(http://example.com/name,constant,iri) -> P,create(Name,reference,literal,None,None) -> O](pi[Name](student.csv))\n";

    fn cli_command() -> Command {
        let mut command = Command::new(env!("CARGO"));
        command.arg("run").arg("--bin").arg("konverter");
        command.arg("--");
        command
    }

    fn mapping_file(content: &str) -> Result<NamedTempFile> {
        let file = NamedTempFile::new("mapping.ttl")?;
        file.write_str(content)?;
        Ok(file)
    }

    #[test]
    fn cli_help() {
        cli_command()
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("--mapping"));
    }

    #[test]
    fn cli_compile_to_stdout() -> Result<()> {
        let mapping = mapping_file(STUDENT_MAPPING)?;
        cli_command()
            .arg("--mapping")
            .arg(mapping.path())
            .assert()
            .success()
            .stdout(STUDENT_PLAN);
        Ok(())
    }

    #[test]
    fn cli_compile_to_file() -> Result<()> {
        let mapping = mapping_file(STUDENT_MAPPING)?;
        let plan = NamedTempFile::new("plan.txt")?;
        cli_command()
            .arg("-m")
            .arg(mapping.path())
            .arg("--emit-plan")
            .arg(plan.path())
            .arg("--no-threading")
            .arg("--continue-on-error")
            .assert()
            .success()
            .stdout("");
        plan.assert(STUDENT_PLAN);
        Ok(())
    }

    #[test]
    fn cli_base_resolves_relative_iris() -> Result<()> {
        let mapping = mapping_file(
            "@prefix rr: <http://www.w3.org/ns/r2rml#> .
@prefix rml: <http://semweb.mmlab.be/ns/rml#> .

<#TM> a rr:TriplesMap ;
    rml:logicalSource [ rml:source \"people.csv\" ] ;
    rr:subjectMap [ rr:template \"http://e.org/{id}\" ] ;
    rr:predicateObjectMap [ rr:predicate <knows> ; rr:objectMap [ rml:reference \"friend\" ] ] .
",
        )?;
        cli_command()
            .arg("-m")
            .arg(mapping.path())
            .arg("-b")
            .arg("http://e.org/")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "create(http://e.org/knows,constant,iri) -> P",
            ));
        Ok(())
    }

    #[test]
    fn cli_missing_mapping_file() {
        cli_command()
            .arg("-m")
            .arg("does-not-exist.ttl")
            .assert()
            .failure()
            .stdout(predicate::str::starts_with(
                "Failed to read mapping document 'does-not-exist.ttl'",
            ));
    }

    #[test]
    fn cli_invalid_turtle() -> Result<()> {
        let mapping = mapping_file("xyz:a xyz:b xyz:c .")?;
        cli_command()
            .arg("-m")
            .arg(mapping.path())
            .assert()
            .failure()
            .stdout(predicate::str::starts_with("Error: "));
        Ok(())
    }

    #[test]
    fn cli_mapping_without_triples_maps() -> Result<()> {
        let mapping = mapping_file("<http://e.org/s> <http://e.org/p> \"o\" .")?;
        cli_command()
            .arg("-m")
            .arg(mapping.path())
            .assert()
            .failure()
            .stdout("Error: No TMs found.\n");
        Ok(())
    }

    #[test]
    fn cli_invalid_base() -> Result<()> {
        let mapping = mapping_file(STUDENT_MAPPING)?;
        cli_command()
            .arg("-m")
            .arg(mapping.path())
            .arg("--base")
            .arg("not an iri")
            .assert()
            .failure()
            .stdout(predicate::str::contains("Invalid base IRI 'not an iri'"));
        Ok(())
    }

    #[test]
    fn flags_map_to_run_options() {
        let args = Args::parse_from([
            "konverter",
            "-m",
            "mapping.ttl",
            "-o",
            "out.nq",
            "--no-const-folding",
            "--no-ordering",
            "--blank-node-seed",
            "3",
        ]);
        let options = args.run_options();
        assert_eq!(options.output_path, PathBuf::from("out.nq"));
        assert_eq!(options.base_uri, "http://example.com/base/");
        assert!(options.threading_enabled);
        assert!(!options.materialize_constants);
        assert!(!options.heuristic_ordering);
        assert!(!options.continue_on_error);
        assert_eq!(options.blank_node_seed, 3);
    }

    #[test]
    fn clap_debug() {
        use clap::CommandFactory;

        Args::command().debug_assert()
    }
}
