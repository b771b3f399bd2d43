//--> Imports <--

use std::{
	ffi::OsString,
	fs,
	io::{
		self,
		ErrorKind,
	},
	path::{
		Path,
		PathBuf,
	},
	process,
};

use asm86::{
	listing,
	Diagnostic,
};

use clap::Arg;

use tracing::Level;

//--> Functions <--

fn main() {
	let args = {
		clap::command!()
		.long_about(
			"asm86 translates a small subset of 8086 assembly into object code, one line at a time. \
			It understands the SUB, IMUL and POP instructions and the DB and DW data directives.\n\n\
			Each line is placed at the address following the last line that translated. \
			Lines that can't be translated are reported and skipped; they don't stop the rest of the file.\n\n\
			The result is written as a table of line numbers, addresses, object code and source text."
		)
		.arg_required_else_help(true)
		.args([
			{
				Arg::new("verbose")
				.short('v')
				.long("verbose")
				.help("Logs every line as it is translated or skipped, rather than just the skipped ones.")
			},
			{
				Arg::new("output")
				.short('o')
				.long("out")
				.value_name("OUTPATH")
				.value_parser(clap::value_parser!(PathBuf))
				.help("Specifies a custom path for the listing. By default, it is placed next to the input as '<name>_translated<.ext>'.")
			},
			{
				Arg::new("infile")
				.value_name("INPATH")
				.value_parser(clap::value_parser!(PathBuf))
				.required(true)
				.help("Path to the source file.")
			}
		])
		.get_matches()
	};

	let verbose = args.contains_id("verbose");

	tracing_subscriber::fmt()
		.with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
		.with_writer(io::stderr)
		.init();

	// This is a required argument, so unwrapping is okay here.
	let input_path = args.get_one::<PathBuf>("infile").unwrap().clone();

	let output_path = match args.get_one::<PathBuf>("output") {
		Some(path) => path.clone(),
		None => default_output_path(&input_path)
	};

	let source = match fs::read_to_string(&input_path) {
		Ok(source) => source,
		Err(err) => {
			eprintln!("{}", Diagnostic::new(false, input_path, None, match err.kind() {
				ErrorKind::NotFound => format!("Couldn't find the file."),
				ErrorKind::PermissionDenied => format!("Wasn't allowed to open the file. (insufficient permissions)"),
				ErrorKind::InvalidData => format!("The file contained invalid data. (likely not UTF-8 text)"),
				_ => format!("Encountered unexpected I/O error while trying to read the file: {}", err)
			}));
			process::exit(1);
		}
	};

	tracing::info!("translating {}", input_path.display());

	let translation = asm86::translate(&source);

	for skipped in &translation.skipped {
		eprintln!("{}", Diagnostic::skipped(input_path.clone(), skipped.line_number, &skipped.error));
	}

	if let Err(err) = fs::write(&output_path, listing::render(&translation.records())) {
		eprintln!("{}", Diagnostic::new(false, output_path, None, format!("Couldn't write the listing: {}", err)));
		process::exit(1);
	}

	println!(
		"INFO: Translated {} lines, skipped {}.\nINFO: The listing was output at '{}'.",
		translation.lines.len(),
		translation.skipped.len(),
		output_path.display()
	);
}

// foo/prog.asm -> foo/prog_translated.asm
fn default_output_path(input: &Path) -> PathBuf {
	let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
	name.push("_translated");

	if let Some(ext) = input.extension() {
		name.push(".");
		name.push(ext);
	}

	input.with_file_name(name)
}
