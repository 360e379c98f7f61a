// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]
use RustedPoly::Utils::logger::{init_logger, parse_log_level};
use RustedPoly::cli::{Cli, run, usage_lines};
use clap::Parser;
use simplelog::LevelFilter;

fn main() {
    let lines = match Cli::try_parse() {
        Ok(cli) => {
            let level = parse_log_level(&cli.log_level).unwrap_or_else(|e| {
                eprintln!("{}", e);
                LevelFilter::Warn
            });
            init_logger(level, cli.log_file);
            run(&cli)
        }
        Err(e) => usage_lines(&e),
    };
    for line in lines {
        println!("{}", line);
    }
}
