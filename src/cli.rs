// src/cli.rs
use std::{env, path::PathBuf};

use crate::params::Params;
use crate::progress::Progress;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut progress = ConsoleProgress;
    let summary = match crate::runner::run(&params, Some(&mut progress)) {
        Ok(s) => s,
        Err(e) => {
            loge!("run failed: {e}");
            return Err(e);
        }
    };

    println!("Merged {} federations.", summary.merged_rows);
    for p in summary.files_written {
        println!("Wrote {}", p.display());
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--world" => {
                params.world = PathBuf::from(args.next().ok_or("Missing value for --world")?);
            }
            "--csv" => params.write_csv = true,
            "--png" => params.write_png = true,
            "--width" => {
                let v: u32 = args.next().ok_or("Missing value for --width")?.parse()?;
                if !(200..=8000).contains(&v) {
                    return Err("Width out of range (200..8000)".into());
                }
                params.fig_width = v;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn stage_done(&mut self, stage: &str) {
        println!("  [{stage}] done");
    }
}
