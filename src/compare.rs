// The comparator: classifies every drawn pixel against the reference image.
// Visual expectation: the result buffer is blue where the drawing matches,
// red where it misses, and transparent everywhere the pixel was not scored.
use crate::color::{MATCH_MARK, MISMATCH_MARK, Rgb};
use crate::error::{Error, Result};
use image::RgbaImage;

/// Similarity of a drawing to the reference.
///
/// `Undefined` is the 0/0 case (nothing drawn); it is a different answer
/// from `Percent(0.0)`, which means pixels were drawn and none matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Similarity {
    Undefined,
    /// Unrounded `matched / user_drawn * 100`.
    Percent(f64),
}

impl Similarity {
    /// The percentage, or NaN when undefined.
    pub fn as_f64(self) -> f64 {
        match self {
            Similarity::Undefined => f64::NAN,
            Similarity::Percent(p) => p,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Similarity::Percent(_))
    }
}

/// Aggregates of one comparison pass.
/// Always `matched <= model_color <= user_drawn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchCounts {
    /// Pixels with non-zero alpha in the user buffer.
    pub user_drawn: usize,
    /// Drawn pixels whose reference color lies within tolerance of the model color.
    pub model_color: usize,
    /// Scored pixels whose drawn color lies within tolerance of the reference pixel.
    pub matched: usize,
}

impl MatchCounts {
    pub fn similarity(&self) -> Similarity {
        if self.user_drawn == 0 {
            Similarity::Undefined
        } else {
            Similarity::Percent(self.matched as f64 / self.user_drawn as f64 * 100.0)
        }
    }
}

/// Output of [`compare`]: a flat RGBA result buffer plus the counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub result: Vec<u8>,
    pub counts: MatchCounts,
}

/// Output of [`compare_images`].
#[derive(Debug, Clone)]
pub struct ImageComparison {
    pub result: RgbaImage,
    pub counts: MatchCounts,
}

/// Compare two flat RGBA buffers of identical length.
///
/// For each pixel drawn by the user (alpha != 0):
/// 1. the reference pixel must lie within `tolerance` of `model`, otherwise the
///    pixel is outside the scored region and its result slot stays zero;
/// 2. the user pixel is then compared with the *observed* reference pixel and
///    marked blue (within tolerance) or red.
///
/// Both thresholds are inclusive.
pub fn compare(reference: &[u8], user: &[u8], model: Rgb, tolerance: f64) -> Result<Comparison> {
    // 1) Reject anything that would make the pixel walk meaningless.
    if reference.len() != user.len() {
        return Err(Error::ShapeMismatch { reference: reference.len(), user: user.len() });
    }
    if user.is_empty() {
        return Err(Error::EmptyBuffer);
    }
    if user.len() % 4 != 0 {
        return Err(Error::NotPixelAligned { len: user.len() });
    }
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(Error::InvalidTolerance(tolerance));
    }

    // 2) Untouched slots must read as transparent, so start from zeros.
    let mut result = vec![0u8; user.len()];
    let mut counts = MatchCounts::default();

    // 3) One pass over all pixels.
    let pixels = reference
        .chunks_exact(4)
        .zip(user.chunks_exact(4))
        .zip(result.chunks_exact_mut(4));
    for ((ref_px, user_px), out_px) in pixels {
        if user_px[3] == 0 {
            continue; // not drawn
        }
        counts.user_drawn += 1;

        let observed = Rgb::from_rgba(ref_px);
        if observed.distance(model) > tolerance {
            continue; // reference pixel is not the model color here
        }
        counts.model_color += 1;

        if Rgb::from_rgba(user_px).distance(observed) <= tolerance {
            counts.matched += 1;
            out_px.copy_from_slice(&MATCH_MARK);
        } else {
            out_px.copy_from_slice(&MISMATCH_MARK);
        }
    }

    Ok(Comparison { result, counts })
}

/// [`compare`] over two images, which must share width and height.
pub fn compare_images(
    reference: &RgbaImage,
    user: &RgbaImage,
    model: Rgb,
    tolerance: f64,
) -> Result<ImageComparison> {
    if reference.dimensions() != user.dimensions() {
        return Err(Error::DimensionMismatch {
            reference: reference.dimensions(),
            user: user.dimensions(),
        });
    }

    let (w, h) = user.dimensions();
    let Comparison { result, counts } = compare(reference.as_raw(), user.as_raw(), model, tolerance)?;
    // Same length as the inputs, so this cannot fail for a well-formed RgbaImage.
    let result = RgbaImage::from_raw(w, h, result).ok_or(Error::NotPixelAligned { len: user.len() })?;

    Ok(ImageComparison { result, counts })
}
