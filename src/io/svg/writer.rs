//! SVG/HTML markup writing operations.

use std::{borrow::Cow, io::Write};

use anyhow::{Context, Result};

/// String-based markup writer; documents are built in memory and handed to
/// the caller as a `String`.
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        std::io::Result::Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { std::io::Result::Ok(()) }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.buffer.extend_from_slice(buf);
        std::io::Result::Ok(())
    }
}

impl SvgStringWriter {
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Get the finished document
    pub(crate) fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[io::svg] SVG output is not valid UTF-8")
    }
}

/// Write the XML declaration for a standalone SVG document.
pub(crate) fn write_xml_declaration<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    Ok(())
}

/// Write an opening <svg> tag sized `width` x `height`.
pub(crate) fn write_svg_open<W: Write>(writer: &mut W, id: &str, width: f64, height: f64) -> Result<()> {
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg" id="{id}" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"##,
        id = escape(id),
    )?;
    Ok(())
}

/// Write SVG styles for county shapes and legend text.
pub(crate) fn write_svg_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .county {{ stroke: #ffffff; stroke-width: 0.25; fill-rule: evenodd; }}
    .county:hover {{ stroke: #111827; stroke-width: 1; }}
    .legend-label {{ font-family: sans-serif; font-size: 14px; dominant-baseline: middle; }}
</style>
</defs>"##)?;
    Ok(())
}

/// Write the closing </svg> tag.
pub(crate) fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}

/// Escape text for XML/HTML content and double-quoted attribute values.
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("Doña Ana County"), "Doña Ana County");
        assert_eq!(escape(r#"A & B <"C">"#), "A &amp; B &lt;&quot;C&quot;&gt;");
        assert_eq!(escape("Prince George's"), "Prince George&#39;s");
    }

    #[test]
    fn string_writer_collects_output() {
        let mut writer = SvgStringWriter::new();
        write_svg_open(&mut writer, "map", 10.0, 5.0).unwrap();
        write_svg_footer(&mut writer).unwrap();
        let svg = writer.into_string().unwrap();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" id="map" width="10" height="5""#));
        assert!(svg.ends_with("</svg>\n"));
    }
}
