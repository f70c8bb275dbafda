use coursegraph::catalog::iterator::SubjectMatchesExt;

const USAGE_BRIEF: &str = "Usage: coursegraph-terminal [options] <majors|graph|course|subjects> ...";

fn main() {
	let mut opts;

	/* Parse console input */
	let parsed_options = {
		let args: Vec<String> = std::env::args().collect();

		opts = getopts::Options::new();
		opts.optflag( "h", "help",      "Show help");
		opts.optflag( "v", "verbose",   "Increased verbosity");
		opts.optflag( "",  "pretty",    "Pretty-print JSON output");
		opts.optopt(  "c", "catalog",   "Course catalog dump to import, also refreshes the cached catalog", "FILE");
		opts.optopt(  "m", "majors",    "Major requirement document, or a directory of them", "PATH");
		opts.optopt(  "",  "completed", "Completed courses, a JSON array or one code per line", "FILE");
		opts.optopt(  "",  "data-dir",  "Override the data directory", "DIR");
		opts.parsing_style(getopts::ParsingStyle::FloatingFrees);

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m)  => { m }
			Err(e) => { println!("Unable to parse options: {}", e); return }
		};

		if parsed_options.opt_present("h") {
			eprintln!("{}", opts.usage(USAGE_BRIEF));
			return;
		}

		parsed_options
	};

	if parsed_options.opt_present("v") {
		env_logger::Builder::from_default_env().filter_level(log::LevelFilter::Debug).init();
	} else {
		env_logger::init();
	}

	let mut config = coursegraph::CourseGraphOptions::default();
	if let Some(dir) = parsed_options.opt_str("data-dir") {
		if !config.set_data_dir(std::path::PathBuf::from(&dir)) {
			log::error!("Data directory {} doesn't exist.", dir);
			return;
		}
	}

	let command = match parsed_options.free.first() {
		Some(c) => c.clone(),
		None => {
			eprintln!("{}", opts.usage(USAGE_BRIEF));
			return;
		}
	};

	let result = match command.as_str() {
		"majors" => list_majors(&parsed_options),
		"graph" => export_graph(&config, &parsed_options),
		"course" => show_course(&config, &parsed_options),
		"subjects" => list_subject(&config, &parsed_options),
		other => {
			log::error!("Unknown command: {}", other);
			eprintln!("{}", opts.usage(USAGE_BRIEF));
			return;
		}
	};

	if let Err(e) = result {
		log::error!("{} failed: {}", command, e);
	}
}

/// Imports the catalog named on the command line, falling back to the cached one.
fn load_catalog(config: &coursegraph::CourseGraphOptions, parsed_options: &getopts::Matches) -> Result<coursegraph::Catalog, Error> {
	if let Some(path) = parsed_options.opt_str("catalog") {
		let json = std::fs::read_to_string(path)?;
		let catalog = coursegraph::Catalog::generate_from_json(&json)?;
		log::info!("Imported a catalog of {} courses.", catalog.len());
		if let Err(e) = catalog.save_to_disk(config) {
			log::warn!("Failed to cache the catalog: {}", e);
		}
		return Ok(catalog);
	}

	match coursegraph::Catalog::load_from_disk(config) {
		Ok(catalog) => Ok(catalog),
		Err(coursegraph::Error::IO(e)) if e.kind() == std::io::ErrorKind::NotFound => {
			Err(Error::MissingCatalog)
		}
		Err(coursegraph::Error::Bincode(e)) => {
			log::warn!("Cached catalog is unreadable, the cache format likely changed: {}", e);
			Err(Error::MissingCatalog)
		}
		Err(e) => Err(Error::CourseGraph(e)),
	}
}

fn majors_path(parsed_options: &getopts::Matches) -> Result<String, Error> {
	parsed_options.opt_str("majors").ok_or(Error::MissingArgument("--majors"))
}

/// Reads every requirement document under `path`.
///
/// A document that fails to read is skipped with a warning; one major's bad data
/// shouldn't take down the rest of the listing.
fn load_major_documents(path: &str) -> Result<Vec<coursegraph::MajorDocument>, Error> {
	let path = std::path::Path::new(path);

	let mut files = Vec::new();
	if path.is_dir() {
		for entry in std::fs::read_dir(path)? {
			let file = entry?.path();
			if file.extension().and_then(|e| e.to_str()) == Some("json") {
				files.push(file);
			}
		}
		files.sort();
	} else {
		files.push(path.to_path_buf());
	}

	let mut documents = Vec::new();
	for file in files {
		let json = match std::fs::read_to_string(&file) {
			Ok(json) => json,
			Err(e) => {
				log::warn!("Skipping {}: {}", file.display(), e);
				continue
			}
		};
		let value: serde_json::Value = match serde_json::from_str(&json) {
			Ok(value) => value,
			Err(e) => {
				log::warn!("Skipping {}: {}", file.display(), e);
				continue
			}
		};
		/* A file holds either one document or an array of them. */
		let values = match value {
			serde_json::Value::Array(items) => items,
			single => vec![single],
		};
		for value in values {
			match coursegraph::MajorDocument::read_from_json(&value) {
				Ok(document) => documents.push(document),
				Err(e) => log::warn!("Skipping a major document in {}: {}", file.display(), e),
			}
		}
	}
	Ok(documents)
}

fn list_majors(parsed_options: &getopts::Matches) -> Result<(), Error> {
	let documents = load_major_documents(&majors_path(parsed_options)?)?;

	let mut rows: Vec<(String, String)> = documents.iter()
		.map(|d| (d.slug(), d.major_name.clone()))
		.collect();
	rows.sort();
	for (slug, name) in rows {
		println!("{}\t{}", slug, name);
	}
	Ok(())
}

fn export_graph(config: &coursegraph::CourseGraphOptions, parsed_options: &getopts::Matches) -> Result<(), Error> {
	let slug = parsed_options.free.get(1).ok_or(Error::MissingArgument("graph <major-slug>"))?;

	let catalog = load_catalog(config, parsed_options)?;
	let documents = load_major_documents(&majors_path(parsed_options)?)?;
	let document = coursegraph::requirements::find_major(&documents, slug)?;

	let seeds = coursegraph::requirements::SeedSets::collect(document)?;
	let mut graph = coursegraph::graph::GraphBuilder::new(&catalog).seeds(seeds).build();

	let completions = match parsed_options.opt_str("completed") {
		Some(path) => coursegraph::graph::CompletionSet::from_raw(&read_completions(&path)?, &catalog),
		None => coursegraph::graph::CompletionSet::default(),
	};
	graph.recompute_status(&completions);

	log::info!("Graph for {} covers {} courses.", document.major_name, graph.len());
	let summaries = graph.summaries();
	let json = if parsed_options.opt_present("pretty") {
		serde_json::to_string_pretty(&summaries)?
	} else {
		serde_json::to_string(&summaries)?
	};
	println!("{}", json);
	Ok(())
}

/// Reads a completion list, either a JSON array of codes or a plain line-per-code file.
fn read_completions(path: &str) -> Result<Vec<String>, Error> {
	let text = std::fs::read_to_string(path)?;
	if let Ok(serde_json::Value::Array(items)) = serde_json::from_str(&text) {
		return Ok(items.into_iter()
			.filter_map(|v| v.as_str().map(str::to_string))
			.collect());
	}
	Ok(text.lines()
		.map(|line| line.trim().to_string())
		.filter(|line| !line.is_empty() && !line.starts_with('#'))
		.collect())
}

fn show_course(config: &coursegraph::CourseGraphOptions, parsed_options: &getopts::Matches) -> Result<(), Error> {
	let spelling = parsed_options.free.get(1).ok_or(Error::MissingArgument("course <code>"))?;

	let catalog = load_catalog(config, parsed_options)?;
	let code = coursegraph::CourseCode::parse(spelling)?;
	let entry = match catalog.get(&code) {
		Some(entry) => entry,
		None => return Err(Error::UnknownCourse(code.to_string())),
	};
	let canonical = catalog.resolve(&code).cloned().unwrap_or(code);

	println!("{}\t{} ({} units)", canonical.label(), entry.title, entry.units);
	if let Some(description) = &entry.description {
		println!("{}", description);
	}
	match &entry.prerequisites_raw {
		Some(raw) => {
			println!("prerequisites: {}", raw);
			let mut mentioned: Vec<coursegraph::CourseCode> = coursegraph::catalog::PrereqScanner::new()
				.scan(raw, &catalog)
				.into_iter()
				.collect();
			mentioned.sort();
			if !mentioned.is_empty() {
				let mentioned: Vec<String> = mentioned.iter().map(|c| c.to_string()).collect();
				println!("recognised: {}", mentioned.join(", "));
			}
		}
		None => println!("prerequisites: none"),
	}
	Ok(())
}

fn list_subject(config: &coursegraph::CourseGraphOptions, parsed_options: &getopts::Matches) -> Result<(), Error> {
	let subject = parsed_options.free.get(1).ok_or(Error::MissingArgument("subjects <subject>"))?;

	let catalog = load_catalog(config, parsed_options)?;
	let mut entries: Vec<_> = catalog.entries().subject_matches(subject).collect();
	entries.sort_by(|a, b| a.number.cmp(&b.number));

	if entries.is_empty() {
		log::warn!("No catalog entries under subject {}.", subject);
	}
	for entry in entries {
		println!("{} {}\t{} ({} units)", entry.subject, entry.number, entry.title, entry.units);
	}
	Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("coursegraph error: {0}")]
	CourseGraph(#[from] coursegraph::Error),
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	#[error("missing argument: {0}")]
	MissingArgument(&'static str),
	#[error("no cached catalog, import one with --catalog")]
	MissingCatalog,
	#[error("no catalog entry for {0}")]
	UnknownCourse(String),
}
