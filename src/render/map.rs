use std::io::Write;

use anyhow::{anyhow, Result};

use crate::{
    classify::{ClassScheme, ClassifiedCounty},
    data::bounds_of,
    io::{escape, multipolygon_to_path, Projector},
};

use super::{Projection, RenderOptions};

/// Size of one legend swatch, and the vertical pitch between rows.
pub(crate) const LEGEND_SWATCH: f64 = 40.0;
pub(crate) const LEGEND_WIDTH: f64 = 200.0;
const LEGEND_TEXT_FILL: &str = "rgb(97, 96, 96)";

pub(crate) fn projector(counties: &[ClassifiedCounty], options: &RenderOptions) -> Result<Projector> {
    Ok(match options.projection {
        Projection::Identity => Projector::Identity,
        Projection::Fit => {
            let features = counties.iter().map(|c| c.feature).collect::<Vec<_>>();
            let bounds = bounds_of(&features)
                .ok_or_else(|| anyhow!("[render] Could not determine bounds; nothing to draw."))?;
            Projector::fit(&bounds, options.width, options.height, options.margin)
        }
    })
}

/// One `<path class="county">` per county, filled with its bucket color and
/// carrying a `<title>` tooltip.
pub(crate) fn draw_counties(
    writer: &mut impl Write,
    counties: &[ClassifiedCounty],
    scheme: &ClassScheme,
    projector: &Projector,
) -> Result<()> {
    for county in counties {
        let record = county.record;
        let fill = scheme.color(county.bucket)
            .ok_or_else(|| anyhow!("[render] County {} has bucket {} outside the scheme.", county.feature.id, county.bucket.index()))?;
        writeln!(writer,
            r#"<path class="county" d="{d}" fill="{fill}" data-fips="{fips}" data-education="{value}"><title>{tip}</title></path>"#,
            d = multipolygon_to_path(&county.feature.geometry, projector),
            fips = county.feature.id,
            value = record.bachelors_or_higher,
            tip = escape(&record.summary()),
        )?;
    }
    Ok(())
}

/// Legend rows top to bottom from the lowest class: a swatch and its label.
pub(crate) fn draw_legend(writer: &mut impl Write, scheme: &ClassScheme, x: f64) -> Result<()> {
    writeln!(writer, r#"<g id="legend" transform="translate({x},0)">"#)?;
    for (bucket, class) in scheme.buckets() {
        let y = bucket.index() as f64 * LEGEND_SWATCH;
        writeln!(writer,
            r#"<rect class="legend-item" x="10" y="{y}" width="{s}" height="{s}" fill="{fill}"/>"#,
            s = LEGEND_SWATCH,
            fill = class.color,
        )?;
        writeln!(writer,
            r#"<text class="legend-label" x="60" y="{ty}" fill="{LEGEND_TEXT_FILL}">{label}</text>"#,
            ty = y + LEGEND_SWATCH / 2.0,
            label = escape(&class.label),
        )?;
    }
    writeln!(writer, "</g>")?;
    Ok(())
}

pub(crate) fn legend_height(scheme: &ClassScheme) -> f64 {
    scheme.len() as f64 * LEGEND_SWATCH
}
