use std::io::BufWriter;
use std::path::Path;
use std::process::ExitCode;
use std::{env, fs};

use getopts::Options;

use overhang_fea::classes::Config;
use overhang_fea::fea;
use overhang_fea::generate::generate;
use overhang_fea::shape::Shaper;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help message");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if matches.opt_present("h") || matches.free.len() != 2 {
        let brief = format!("Usage: {} FONT FEA", args[0]);
        eprint!("{}", opts.usage(&brief));
        return if matches.opt_present("h") {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    match run(Path::new(&matches.free[0]), Path::new(&matches.free[1])) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(font_path: &Path, fea_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data =
        fs::read(font_path).map_err(|err| format!("{}: {}", font_path.display(), err))?;

    let config = Config::default();
    let mut shaper = Shaper::new(&data, config.aliases.clone())?;
    let rules = generate(&mut shaper, &config)?;

    let file = fs::File::create(fea_path)
        .map_err(|err| format!("{}: {}", fea_path.display(), err))?;
    fea::write_feature(BufWriter::new(file), &rules)
        .map_err(|err| format!("{}: {}", fea_path.display(), err))?;
    Ok(())
}
