use anyhow::{bail, Result};
use clipfilter::clips::pipeline::{run, Config};
use std::{env, path::PathBuf};

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() > 3 {
        bail!("Wrong number of arguments. Expected at most three. Usage: `./clipfilter [input.csv] [valid.csv] [invalid.csv]`");
    }
    let mut config = Config::default();
    let mut slots = [
        &mut config.input,
        &mut config.valid_output,
        &mut config.invalid_output,
    ];
    for (slot, arg) in slots.iter_mut().zip(args) {
        **slot = PathBuf::from(arg);
    }
    // any failure here is fatal; no partial output is reported as success
    run(&config)?;
    Ok(())
}
