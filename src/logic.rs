/// One decoded reading, fields still raw device strings.
pub struct RawReading {
    pub light: String,
    pub motion: String,
}

#[derive(Debug)]
pub enum ParseError {
    MissingSegment,
    MissingValue,
}

impl ParseError {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseError::MissingSegment => "missing_segment",
            ParseError::MissingValue => "missing_value",
        }
    }
}

/// Decode the device encoding `light:<v>-motion:<v>`.
///
/// Extraction is positional: first segment is light, second is motion, keys
/// are not checked. Segments past the second and colon tokens past the second
/// are ignored.
pub fn parse_var(var: &str) -> Result<RawReading, ParseError> {
    let mut segments = var.split('-');
    let light_segment = segments.next().ok_or(ParseError::MissingSegment)?;
    let motion_segment = segments.next().ok_or(ParseError::MissingSegment)?;

    let light = segment_value(light_segment).ok_or(ParseError::MissingValue)?;
    let motion = segment_value(motion_segment).ok_or(ParseError::MissingValue)?;

    Ok(RawReading {
        light: light.to_string(),
        motion: motion.to_string(),
    })
}

fn segment_value(segment: &str) -> Option<&str> {
    segment.split(':').nth(1)
}
