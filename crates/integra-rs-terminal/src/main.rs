fn main() {
	env_logger::init();

	let mut opts;

	/* Parse console input */
	let parsed_options = {
		let args: Vec<String> = std::env::args().collect();

		opts = getopts::Options::new();
		opts.optflag( "h", "help",       "Show help");
		opts.optopt(  "c", "catalog",    "JSON manifest of every known release, used to find outdated integrations", "FILE");
		opts.optopt(  "o", "options",    "JSON file of checker options", "FILE");
		opts.optflag( "",  "no-cycles",  "Skip circular dependency detection");
		opts.optflag( "j", "json",       "Print the report as JSON");
		opts.parsing_style(getopts::ParsingStyle::FloatingFrees);

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m)  => { m }
			Err(e) => { println!("Unable to parse options: {}", e); return }
		};

		if parsed_options.opt_present("h") {
			eprintln!("{}", opts.usage("Usage: integra-rs-terminal check MANIFEST [options]"));
			return;
		}

		parsed_options
	};

	let command = match parsed_options.free.first() {
		Some(c) => c.as_str(),
		None => {
			log::error!("No command provided, see --help.");
			std::process::exit(2);
		},
	};

	match command {
		"check" => {
			let manifest = match parsed_options.free.get(1) {
				Some(p) => std::path::PathBuf::from(p),
				None => { log::error!("Manifest path not provided."); std::process::exit(2) },
			};

			match check(&parsed_options, manifest) {
				Ok(true) => {},
				Ok(false) => std::process::exit(1),
				Err(e) => {
					log::error!("Check failed: {}", e);
					std::process::exit(2);
				},
			}
		},
		other => {
			log::error!("Unknown command \"{}\".", other);
			std::process::exit(2);
		},
	}
}

/// Returns `Ok(true)` when the checked integrations have no errors.
fn check(parsed_options: &getopts::Matches, manifest: impl AsRef<std::path::Path>) -> Result<bool, Error> {
	let mut options = match parsed_options.opt_str("o") {
		Some(path) => integra_rs::CheckerOptions::load_from_file(path)?,
		None => integra_rs::CheckerOptions::default(),
	};
	if parsed_options.opt_present("no-cycles") {
		options.set_check_cycles(false);
	}

	let integrations = integra_rs::manifest::read_integrations_from_file(manifest)?;
	if integrations.is_empty() {
		return Err(Error::EmptyManifest);
	}

	let catalog = parsed_options.opt_str("c")
		.map(integra_rs::manifest::read_catalog_from_file)
		.transpose()?;

	log::info!("Checking {} integrations", integrations.len());
	let checker = integra_rs::CompatibilityChecker::with_options(options);
	let result = checker.check_all(&integrations, catalog.as_ref());

	if parsed_options.opt_present("j") {
		println!("{}", result.to_json()?);
	} else {
		print!("{}", result);
	}

	Ok(result.is_ok())
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("integra-rs error: {0}")]
	IntegraError(#[from] integra_rs::Error),
	#[error("manifest contains no integrations")]
	EmptyManifest,
}
