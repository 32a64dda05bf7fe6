use std::io::{self, Write};

use crate::gfa::GFA;

/// Write the whole GFA: the header line, then the comments, then all
/// segments and links in insertion order. Every line ends with a
/// newline.
pub fn write_gfa<W: Write>(gfa: &GFA, stream: &mut W) -> io::Result<()> {
    let header = gfa.header();
    writeln!(stream, "{}", header.header_line())?;
    for comment in header.comments() {
        stream.write_all(comment)?;
        stream.write_all(b"\n")?;
    }
    for seg in gfa.segments() {
        writeln!(stream, "{}", seg)?;
    }
    for link in gfa.links() {
        writeln!(stream, "{}", link)?;
    }
    Ok(())
}

pub fn gfa_string(gfa: &GFA) -> String {
    let mut result = Vec::new();
    write_gfa(gfa, &mut result).expect("Error writing GFA to buffer");
    String::from_utf8_lossy(&result).into_owned()
}
