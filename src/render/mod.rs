//! Rendering of classified counties into a fresh SVG or HTML document.

mod map;
mod options;

use std::{io::Write, path::Path};

use anyhow::Result;
use tracing::{debug, info};

use crate::{
    classify::{ClassScheme, ClassifiedCounty},
    io::{escape, write_atomic, write_svg_footer, write_svg_open, write_svg_styles, write_xml_declaration, SvgStringWriter},
};

pub use options::{OutputFormat, Projection, RenderOptions};

const PAGE_STYLE: &str = r#"<style>
    body { font-family: sans-serif; margin: 0; padding: 1rem; }
    #app { position: relative; }
    #title { font-size: 2rem; font-weight: bold; text-align: center; }
    #description { text-align: center; margin-bottom: 1rem; }
    #tooltip { position: fixed; visibility: hidden; pointer-events: none; padding: 0.4rem 0.6rem;
               background: rgba(17, 24, 39, 0.9); color: #ffffff; border-radius: 4px; font-size: 0.9rem; }
</style>"#;

const TOOLTIP_SCRIPT: &str = r##"<script>
    const tooltip = document.getElementById("tooltip");
    document.querySelectorAll("#map .county").forEach((county) => {
        county.addEventListener("mouseover", (event) => {
            tooltip.textContent = county.querySelector("title").textContent;
            tooltip.setAttribute("data-education", county.dataset.education);
            tooltip.style.left = event.clientX + "px";
            tooltip.style.top = event.clientY + "px";
            tooltip.style.visibility = "visible";
        });
        county.addEventListener("mouseout", () => { tooltip.style.visibility = "hidden"; });
    });
</script>"##;

/// Render already-classified counties into a new document.
pub fn render(
    counties: &[ClassifiedCounty],
    scheme: &ClassScheme,
    options: &RenderOptions,
    format: OutputFormat,
) -> Result<String> {
    let mut writer = SvgStringWriter::new();
    match format {
        OutputFormat::Svg => write_svg_document(&mut writer, counties, scheme, options)?,
        OutputFormat::Html => write_html_document(&mut writer, counties, scheme, options)?,
    }
    let document = writer.into_string()?;

    debug!(counties = counties.len(), %format, bytes = document.len(), "rendered map");
    Ok(document)
}

/// Atomically write a rendered document to `path`.
pub fn write_output(path: &Path, document: &str, force: bool) -> Result<()> {
    write_atomic(path, document.as_bytes(), force)?;
    info!(path = %path.display(), bytes = document.len(), "wrote map");
    Ok(())
}

/// Map and legend side by side in one SVG.
fn write_svg_document<W: Write>(
    writer: &mut W,
    counties: &[ClassifiedCounty],
    scheme: &ClassScheme,
    options: &RenderOptions,
) -> Result<()> {
    let projector = map::projector(counties, options)?;
    let width = options.width + map::LEGEND_WIDTH;
    let height = options.height.max(map::legend_height(scheme));

    write_xml_declaration(writer)?;
    write_svg_open(writer, "choropleth", width, height)?;
    write_svg_styles(writer)?;
    writeln!(writer, r#"<title>{}</title>"#, escape(&options.title))?;
    writeln!(writer, r#"<desc>{}</desc>"#, escape(&options.description))?;
    writeln!(writer, r#"<g id="map">"#)?;
    map::draw_counties(writer, counties, scheme, &projector)?;
    writeln!(writer, "</g>")?;
    map::draw_legend(writer, scheme, options.width)?;
    write_svg_footer(writer)?;
    Ok(())
}

/// Page with title, description, tooltip, the map SVG and a separate legend SVG.
fn write_html_document<W: Write>(
    writer: &mut W,
    counties: &[ClassifiedCounty],
    scheme: &ClassScheme,
    options: &RenderOptions,
) -> Result<()> {
    let projector = map::projector(counties, options)?;
    let title = escape(&options.title);

    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, r#"<html lang="en">"#)?;
    writeln!(writer, r#"<head>"#)?;
    writeln!(writer, r#"<meta charset="utf-8">"#)?;
    writeln!(writer, "<title>{title}</title>")?;
    writeln!(writer, "{PAGE_STYLE}")?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;
    writeln!(writer, r#"<div id="app">"#)?;
    writeln!(writer, r#"<div id="title">{title}</div>"#)?;
    writeln!(writer, r#"<div id="description">{}</div>"#, escape(&options.description))?;
    writeln!(writer, r#"<div id="tooltip"></div>"#)?;

    write_svg_open(writer, "map", options.width, options.height)?;
    write_svg_styles(writer)?;
    map::draw_counties(writer, counties, scheme, &projector)?;
    write_svg_footer(writer)?;
    writeln!(writer, "</div>")?;

    write_svg_open(writer, "legend-box", map::LEGEND_WIDTH, map::legend_height(scheme))?;
    write_svg_styles(writer)?;
    map::draw_legend(writer, scheme, 0.0)?;
    write_svg_footer(writer)?;

    writeln!(writer, "{TOOLTIP_SCRIPT}")?;
    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;
    Ok(())
}
