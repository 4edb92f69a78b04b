use std::io::{BufRead, BufReader, BufWriter, Write};

/// ```
/// use std::io::BufRead;
/// let reader = syng::reader("tests/genome/two_genomes.txt");
/// let mut lines = vec![];
/// for line in reader.lines() {
///     lines.push(line);
/// }
/// assert_eq!(lines.len(), 2);
///
/// let reader = syng::reader("tests/genome/two_genomes.txt");
/// assert_eq!(reader.lines().collect::<Vec<_>>().len(), 2);
/// ```
pub fn reader(input: &str) -> Box<dyn BufRead> {
    let reader: Box<dyn BufRead> = if input == "stdin" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let path = std::path::Path::new(input);
        let file = match std::fs::File::open(path) {
            Err(why) => panic!("could not open {}: {}", path.display(), why),
            Ok(file) => file,
        };

        if path.extension() == Some(std::ffi::OsStr::new("gz")) {
            Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    reader
}

pub fn writer(output: &str) -> Box<dyn Write> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        Box::new(BufWriter::new(std::fs::File::create(output).unwrap()))
    };

    writer
}

/// Non-blank lines of a genome file, one genome per line.
///
/// ```
/// let lines = syng::libs::io::read_genome_lines("tests/genome/two_genomes.txt").unwrap();
/// assert_eq!(lines.len(), 2);
/// assert!(lines[0].starts_with('('));
/// ```
pub fn read_genome_lines(input: &str) -> anyhow::Result<Vec<String>> {
    let mut lines = vec![];
    for line in reader(input).lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }

    Ok(lines)
}
