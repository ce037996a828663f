//! Readers for the three reference datasets.
//!
//! * `borders.txt`: one line per country, `Country = Neighbour 123 km; ...`.
//! * `capdist.csv`: capital-to-capital distances keyed by country code pairs.
//! * `state_name.tsv`: country codes and their display names.
//!
//! Malformed entries are skipped with a warning rather than aborting the load;
//! only files that cannot be opened or are structurally unusable are errors.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::tables::{CapitalDistances, CountryCodes};

/// Separator between a country and its neighbour list in `borders.txt`.
const COUNTRY_SEPARATOR: &str = " = ";
/// Separator between neighbour entries in `borders.txt`.
const NEIGHBOUR_SEPARATOR: char = ';';

/// `capdist.csv` columns: origin code, destination code, kilometres.
const CAPITAL_COLUMNS: [&str; 3] = ["ida", "idb", "kmdist"];
/// `state_name.tsv` columns: code, display name.
const COUNTRY_CODE_COLUMNS: [&str; 2] = ["stateid", "countryname"];

/// Labels used in errors when parsing from a reader rather than a file.
const CAPITALS_SOURCE: &str = "<capital distances>";
const COUNTRY_CODES_SOURCE: &str = "<country codes>";

/// One parsed line of `borders.txt`.
///
/// The encoding is directional: only `country`'s line states the border. The
/// graph builder mirrors every pair so the reverse direction need not be
/// present in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderRecord {
    pub country: String,
    pub neighbours: Vec<(String, u32)>,
}

impl BorderRecord {
    /// Convenience constructor used by tests and in-memory datasets.
    pub fn new<S: Into<String>>(country: S, neighbours: &[(&str, u32)]) -> Self {
        Self {
            country: country.into(),
            neighbours: neighbours
                .iter()
                .map(|(name, length)| ((*name).to_string(), *length))
                .collect(),
        }
    }
}

/// Locations of the three input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub borders: PathBuf,
    pub capitals: PathBuf,
    pub country_codes: PathBuf,
}

impl DatasetPaths {
    pub fn new(
        borders: impl Into<PathBuf>,
        capitals: impl Into<PathBuf>,
        country_codes: impl Into<PathBuf>,
    ) -> Self {
        Self {
            borders: borders.into(),
            capitals: capitals.into(),
            country_codes: country_codes.into(),
        }
    }
}

/// Raw ingestion output handed to the graph builder and lookup tables.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub borders: Vec<BorderRecord>,
    pub capitals: CapitalDistances,
    pub country_codes: CountryCodes,
}

/// Load all three datasets from disk.
pub fn load_dataset(paths: &DatasetPaths) -> Result<Dataset> {
    Ok(Dataset {
        borders: load_borders(&paths.borders)?,
        capitals: load_capital_distances(&paths.capitals)?,
        country_codes: load_country_codes(&paths.country_codes)?,
    })
}

/// Read `borders.txt` from `path`.
pub fn load_borders(path: &Path) -> Result<Vec<BorderRecord>> {
    let records = parse_borders(open(path)?)?;
    debug!(
        records = records.len(),
        path = %path.display(),
        "loaded border records"
    );
    Ok(records)
}

/// Read `capdist.csv` from `path`.
pub fn load_capital_distances(path: &Path) -> Result<CapitalDistances> {
    let distances = read_capital_distances(open(path)?, &path.display().to_string())?;
    debug!(
        pairs = distances.len(),
        path = %path.display(),
        "loaded capital distances"
    );
    Ok(distances)
}

/// Read `state_name.tsv` from `path`.
pub fn load_country_codes(path: &Path) -> Result<CountryCodes> {
    let codes = read_country_codes(open(path)?, &path.display().to_string())?;
    debug!(
        codes = codes.len(),
        path = %path.display(),
        "loaded country codes"
    );
    Ok(codes)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::DatasetRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Parse `borders.txt` content into one record per non-blank line.
pub fn parse_borders<R: BufRead>(reader: R) -> Result<Vec<BorderRecord>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(record) = parse_border_line(&line, index + 1) {
            records.push(record);
        }
    }
    Ok(records)
}

fn parse_border_line(line: &str, line_no: usize) -> Option<BorderRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (country, rest) = match line.split_once(COUNTRY_SEPARATOR) {
        Some((country, rest)) => (country.trim(), rest.trim()),
        None => (line.trim_end_matches('=').trim(), ""),
    };
    if country.is_empty() {
        warn!(line = line_no, "skipping border line without a country name");
        return None;
    }

    let neighbours = rest
        .split(NEIGHBOUR_SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let parsed = parse_neighbour(entry);
            if parsed.is_none() {
                warn!(line = line_no, country, entry, "skipping malformed border entry");
            }
            parsed
        })
        .collect();

    Some(BorderRecord {
        country: country.to_string(),
        neighbours,
    })
}

/// Split `"Czech Republic 1,234 km"` into `("Czech Republic", 1234)`.
///
/// The length is the last whitespace token carrying a digit; everything
/// before it is the neighbour's name.
fn parse_neighbour(entry: &str) -> Option<(String, u32)> {
    let tokens: Vec<&str> = entry.split_whitespace().collect();
    let length_at = tokens
        .iter()
        .rposition(|token| token.chars().any(|c| c.is_ascii_digit()))?;
    if length_at == 0 {
        return None;
    }

    let name = tokens[..length_at].join(" ");
    let length = parse_length(tokens[length_at])?;
    Some((name, length))
}

/// `"4,567"` is 4567 and `"1.2"` is 1: thousands separators are dropped and
/// fractional kilometres truncated.
fn parse_length(token: &str) -> Option<u32> {
    let whole = token.split('.').next().unwrap_or(token);
    let digits: String = whole.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Parse `capdist.csv` content: `numa,ida,numb,idb,kmdist,midist`.
///
/// Columns are located by header name, so extra or reordered columns are
/// fine; a header without `ida`, `idb` and `kmdist` is
/// [`Error::MalformedDataset`].
pub fn parse_capital_distances<R: Read>(reader: R) -> Result<CapitalDistances> {
    read_capital_distances(reader, CAPITALS_SOURCE)
}

fn read_capital_distances<R: Read>(reader: R, source: &str) -> Result<CapitalDistances> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = column_indices(csv_reader.headers()?, CAPITAL_COLUMNS, source)?;

    let mut distances = CapitalDistances::default();
    for (index, result) in csv_reader.records().enumerate() {
        let record = result?;
        let row = index + 2;
        match capital_row(&record, columns) {
            Some((from, to, km)) => distances.insert(from, to, km),
            None => warn!(row, "skipping malformed capital distance row"),
        }
    }
    Ok(distances)
}

fn capital_row(
    record: &StringRecord,
    [from, to, km]: [usize; 3],
) -> Option<(String, String, u32)> {
    let from = record.get(from).filter(|s| !s.is_empty())?;
    let to = record.get(to).filter(|s| !s.is_empty())?;
    let km = record.get(km)?.parse::<u32>().ok()?;
    Some((from.to_string(), to.to_string(), km))
}

/// Parse `state_name.tsv` content: `statenumber\tstateid\tcountryname\tstart\tend`.
///
/// Requires `stateid` and `countryname` header columns.
pub fn parse_country_codes<R: Read>(reader: R) -> Result<CountryCodes> {
    read_country_codes(reader, COUNTRY_CODES_SOURCE)
}

fn read_country_codes<R: Read>(reader: R, source: &str) -> Result<CountryCodes> {
    let mut tsv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let [code_at, name_at] =
        column_indices(tsv_reader.headers()?, COUNTRY_CODE_COLUMNS, source)?;

    let mut codes = CountryCodes::default();
    for (index, result) in tsv_reader.records().enumerate() {
        let record = result?;
        let row = index + 2;
        match (record.get(code_at), record.get(name_at)) {
            (Some(code), Some(name)) if !code.is_empty() && !name.is_empty() => {
                codes.insert(code.to_string(), name.to_string());
            }
            _ => warn!(row, "skipping malformed country code row"),
        }
    }
    Ok(codes)
}

/// Map each required column name to its position in `headers` (ASCII
/// case-insensitive).
fn column_indices<const N: usize>(
    headers: &StringRecord,
    required: [&str; N],
    source: &str,
) -> Result<[usize; N]> {
    let mut indices = [0usize; N];
    let mut missing = Vec::new();
    for (slot, name) in indices.iter_mut().zip(required) {
        match headers.iter().position(|header| header.eq_ignore_ascii_case(name)) {
            Some(index) => *slot = index,
            None => missing.push(name),
        }
    }

    if missing.is_empty() {
        return Ok(indices);
    }
    Err(Error::MalformedDataset {
        path: source.to_string(),
        message: format!(
            "missing required column(s) {} (found: {})",
            missing.join(", "),
            headers.iter().collect::<Vec<_>>().join(", ")
        ),
    })
}
