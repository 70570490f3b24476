use crate::constants::FIELD_SEPARATOR;
use crate::error::SweepError;
use crate::numeric::strip_line_ending;
use sweep_data::Sample;

/// Parses one `"<angle>,<distance>"` line.
///
/// Blank lines are keepalives and yield `Ok(None)`. Anything else that is not
/// exactly two integer fields is `MalformedData` carrying the raw line without
/// its line ending. Values are not range checked.
pub fn parse(raw_line: &str) -> Result<Option<Sample>, SweepError> {
    let line = raw_line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut fields = line.split(FIELD_SEPARATOR);
    let (angle, distance) = match (fields.next(), fields.next(), fields.next()) {
        (Some(angle), Some(distance), None) => (angle, distance),
        _ => return Err(malformed(raw_line)),
    };

    let angle = parse_field(angle).ok_or_else(|| malformed(raw_line))?;
    let distance = parse_field(distance).ok_or_else(|| malformed(raw_line))?;
    Ok(Some(Sample::new(angle, distance)))
}

fn parse_field(field: &str) -> Option<i64> {
    field.trim().parse::<i64>().ok()
}

fn malformed(raw_line: &str) -> SweepError {
    SweepError::MalformedData(strip_line_ending(raw_line).to_string())
}
