use std::io::Cursor;
use std::sync::Mutex;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{
    ImageFormat,
    Rgb,
    RgbImage,
    imageops
};
use log::{
    debug,
    warn
};
use plotters::prelude::*;
use plotters::style::{
    FontStyle,
    register_font
};

use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::plot::figure::{
    Figure,
    Layer
};
use crate::plot::plotconfig::PlotConfig;

const FONT_FAMILY: &str = "sans-serif";

const SYSTEM_FONTS: [&str; 5] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf"
];

/// Process-wide record of font registration. Only success is final: until
/// a font registers, every render retries its configured path and the
/// system locations, skipping files that already failed to parse.
struct FontRegistry {
    registered: bool,
    rejected: Vec<String>
}

impl FontRegistry {
    const fn new() -> FontRegistry {
        FontRegistry { registered: false, rejected: Vec::new() }
    }

    fn ensure<'p, I, R>(&mut self, candidates: I, mut register: R) -> bool where
        I: IntoIterator<Item = &'p str>,
        R: FnMut(&'static [u8]) -> bool {
        if self.registered {
            return true;
        }
        for path in candidates {
            if self.rejected.iter().any(|rejected| rejected == path) {
                continue;
            }
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            // plotters keeps a 'static reference to registered font data
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            if register(bytes) {
                debug!("registered plot font {}", path);
                self.registered = true;
                break;
            }
            self.rejected.push(path.to_owned());
        }
        self.registered
    }
}

static FONT_REGISTRY: Mutex<FontRegistry> = Mutex::new(FontRegistry::new());

/// Makes sure plotters has a text font, trying the configured path before
/// the well-known system locations.
fn ensure_font(font_path: Option<&str>) -> bool {
    let mut registry = FONT_REGISTRY.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    registry.ensure(font_path.into_iter().chain(SYSTEM_FONTS), |bytes| {
        register_font(FONT_FAMILY, FontStyle::Normal, bytes).is_ok()
    })
}

/// Rasterizes figures into base64-encoded PNG payloads.
///
/// Every call draws into its own pixel buffer; nothing survives the call, so
/// one renderer may be shared by any number of sequential requests.
#[derive(Debug, Clone, Default)]
pub struct PlotRenderer {
    config: PlotConfig
}

impl PlotRenderer {
    pub fn new(config: PlotConfig) -> PlotRenderer {
        PlotRenderer { config }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn render(&self, figure: &Figure) -> Result<String, QuadratureError> {
        let annotated = ensure_font(self.config.font_path());
        let pixels = match self.rasterize(figure, annotated) {
            Ok(pixels) => pixels,
            Err(error) if annotated => {
                warn!("plot text unavailable ({}), rendering without annotations", error);
                self.rasterize(figure, false)?
            },
            Err(error) => return Err(error)
        };
        if !annotated {
            warn!("no usable font found, '{}' rendered without title, labels or legend", figure.title());
        }
        let image = RgbImage::from_raw(self.config.width(), self.config.height(), pixels)
            .ok_or_else(|| QuadratureError::render_error("pixel buffer does not match image size"))?;
        let cropped = crop_to_content(&image, self.config.crop_padding());
        encode_png_base64(&cropped)
    }

    fn rasterize(&self, figure: &Figure, annotated: bool) -> Result<Vec<u8>, QuadratureError> {
        let mut pixels = vec![0_u8; self.config.width() as usize * self.config.height() as usize * 3];
        self.draw(figure, &mut pixels, annotated)?;
        Ok(pixels)
    }

    fn draw(&self, figure: &Figure, pixels: &mut [u8], annotated: bool) -> Result<(), QuadratureError> {
        let size = (self.config.width(), self.config.height());
        let root = BitMapBackend::with_buffer(pixels, size).into_drawing_area();
        root.fill(&WHITE).map_err(QuadratureError::render_error)?;

        let (x_range, y_range) = figure.bounds();
        let mut builder = ChartBuilder::on(&root);
        builder.margin(12);
        if annotated {
            builder
                .caption(figure.title(), (FONT_FAMILY, 18))
                .x_label_area_size(36)
                .y_label_area_size(56);
        }
        let mut chart = builder
            .build_cartesian_2d(x_range.clone(), y_range)
            .map_err(QuadratureError::render_error)?;

        if annotated {
            chart
                .configure_mesh()
                .x_desc(figure.x_label())
                .y_desc(figure.y_label())
                .draw()
                .map_err(QuadratureError::render_error)?;
        }

        chart
            .draw_series(LineSeries::new(
                vec![(x_range.start, 0.0), (x_range.end, 0.0)],
                BLACK.mix(0.4).stroke_width(1)
            ))
            .map_err(QuadratureError::render_error)?;

        let area_color = self.config.area_color().to_rgb();
        let rectangle_style = self.config
            .rectangle_color()
            .to_rgb()
            .mix(self.config.rectangle_alpha())
            .filled();
        let curve_color = self.config.curve_color().to_rgb();

        for layer in figure.layers() {
            match layer {
                Layer::FilledArea(points) => {
                    chart
                        .draw_series(AreaSeries::new(
                            points.iter().copied(),
                            0.0,
                            &area_color.mix(self.config.area_alpha())
                        ))
                        .map_err(QuadratureError::render_error)?;
                },
                Layer::Bar { x0, x1, height } => {
                    chart
                        .draw_series(std::iter::once(Rectangle::new(
                            [(*x0, 0.0), (*x1, *height)],
                            rectangle_style
                        )))
                        .map_err(QuadratureError::render_error)?;
                },
                Layer::Curve { segments, label, stroke_width } => {
                    let width = *stroke_width;
                    for (i, segment) in segments.iter().enumerate() {
                        let annotation = chart
                            .draw_series(LineSeries::new(
                                segment.iter().copied(),
                                curve_color.stroke_width(width)
                            ))
                            .map_err(QuadratureError::render_error)?;
                        // one legend entry per curve, not per segment
                        if i == 0 {
                            annotation
                                .label(label.as_str())
                                .legend(move |(x, y)| {
                                    PathElement::new(vec![(x, y), (x + 20, y)], curve_color.stroke_width(width))
                                });
                        }
                    }
                }
            }
        }

        if annotated && figure.has_legend() {
            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(QuadratureError::render_error)?;
        }

        root.present().map_err(QuadratureError::render_error)?;
        Ok(())
    }
}

/// Crops to the bounding box of non-white pixels, keeping `padding` pixels
/// of margin where the image allows it.
pub fn crop_to_content(image: &RgbImage, padding: u32) -> RgbImage {
    let background = Rgb([255, 255, 255]);
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if *pixel == background {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y))
        });
    }
    match bounds {
        None => image.clone(),
        Some((x0, y0, x1, y1)) => {
            let left = x0.saturating_sub(padding);
            let top = y0.saturating_sub(padding);
            let right = x1.saturating_add(padding).min(image.width() - 1);
            let bottom = y1.saturating_add(padding).min(image.height() - 1);
            imageops::crop_imm(image, left, top, right - left + 1, bottom - top + 1).to_image()
        }
    }
}

pub fn encode_png_base64(image: &RgbImage) -> Result<String, QuadratureError> {
    let mut bytes: Vec<u8> = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(QuadratureError::render_error)?;
    Ok(STANDARD.encode(bytes))
}
