use clap::Parser;
use geom::Molecule;

/// compute D4 dispersion properties for an XYZ geometry
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
struct Args {
    /// XYZ geometry file with coordinates in Angstroms
    infile: String,

    /// total molecular charge
    #[arg(allow_negative_numbers = true)]
    charge: f64,

    /// print the properties as JSON instead of the usual table
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

macro_rules! die {
    ($($args:tt)*) => {{
        eprintln!($($args)*);
        std::process::exit(1)
    }};
}

fn main() {
    env_logger::init();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => die!("{e}"),
        Err(e) => e.exit(),
    };

    let mut mol = match Molecule::load(&args.infile) {
        Ok(mol) => mol,
        Err(e) => die!("failed to read {} with {e}", args.infile),
    };
    mol.charge = args.charge;
    log::debug!("loaded {} atoms from {}", mol.natoms(), args.infile);

    // the dispersion model works in Bohr
    mol.to_bohr();

    let props = match dftd4::properties(&mol) {
        Ok(props) => props,
        Err(e) => die!("property calculation failed with {e}"),
    };

    if args.json {
        match serde_json::to_string_pretty(&props) {
            Ok(s) => println!("{s}"),
            Err(e) => die!("failed to serialize properties with {e}"),
        }
    } else {
        print!("{props}");
    }
}
