use crate::board::Raster;
use crate::error::{TraceError, TraceResult};

/// Blur kernel reach per axis; radius 2 gives a 5-tap kernel.
pub const BLUR_RADIUS: u32 = 2;
/// Gaussian sigma of the blur kernel.
pub const BLUR_SIGMA: f32 = 1.1;
/// Gaussian sigma of the vignette falloff, in pixels.
pub const VIGNETTE_SIGMA: f64 = 250.0;
/// Share of the vignetted copy in the final blend.
pub const VIGNETTE_BLEND: f32 = 0.3;

/// Soften the raster, then darken it toward the borders.
///
/// At board scale the vignette multipliers stay below one, so the
/// vignetted copy never brightens a pixel and the blend stays in range.
pub fn post_process(raster: &Raster) -> TraceResult<Raster> {
    let blurred = blur_rgba8(
        &raster.data,
        raster.width,
        raster.height,
        BLUR_RADIUS,
        BLUR_SIGMA,
    )?;

    let weights = vignette_weights(raster.width, raster.height, VIGNETTE_SIGMA);
    let mut vignetted = blurred.clone();
    apply_vignette(&mut vignetted, &weights);

    let data = blend_weighted(&blurred, &vignetted, VIGNETTE_BLEND)?;
    Ok(Raster {
        width: raster.width,
        height: raster.height,
        data,
    })
}

/// Separable Gaussian blur over RGBA8 data, clamping at the edges.
pub fn blur_rgba8(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> TraceResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| TraceError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(TraceError::render(
            "blur_rgba8 expects src matching width*height*4",
        ));
    }
    if radius == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    separable_pass(src, &mut tmp, width, height, &kernel, true);
    separable_pass(&tmp, &mut out, width, height, &kernel, false);
    Ok(out)
}

/// Fixed-point Gaussian taps summing to exactly 1 << 16, so constant
/// regions pass through the blur unchanged.
fn gaussian_kernel_q16(radius: u32, sigma: f32) -> TraceResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(TraceError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    for i in -r..=r {
        let x = f64::from(i);
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }
    if sum <= 0.0 {
        return Err(TraceError::render("gaussian kernel sum is zero"));
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = (((wf / sum) * 65536.0).round() as i64).clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    // Push any rounding slack into the center tap.
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let corrected = (i64::from(weights[mid]) + delta).clamp(0, 65536);
        weights[mid] = corrected as u32;
    }

    Ok(weights)
}

fn separable_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32], horizontal: bool) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let offset = ki as i32 - radius;
                let (sx, sy) = if horizontal {
                    ((x + offset).clamp(0, w - 1), y)
                } else {
                    (x, (y + offset).clamp(0, h - 1))
                };
                let idx = ((sy * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    v.min(255) as u8
}

/// Per-pixel vignette multipliers: the outer product of two centered
/// Gaussian vectors, rescaled so its Frobenius norm maps to 255. For
/// board-sized rasters every multiplier stays below 1; tiny rasters
/// can exceed it, which the saturating channel store absorbs.
fn vignette_weights(width: u32, height: u32, sigma: f64) -> Vec<f32> {
    let kx = gaussian_kernel_1d(width as usize, sigma);
    let ky = gaussian_kernel_1d(height as usize, sigma);
    let norm_x = kx.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_y = ky.iter().map(|v| v * v).sum::<f64>().sqrt();
    let scale = 255.0 / (norm_x * norm_y);

    let mut weights = Vec::with_capacity(width as usize * height as usize);
    for wy in &ky {
        for wx in &kx {
            weights.push((scale * wy * wx) as f32);
        }
    }
    weights
}

/// Sum-normalized 1-D Gaussian centered on the vector midpoint.
fn gaussian_kernel_1d(len: usize, sigma: f64) -> Vec<f64> {
    let center = (len as f64 - 1.0) / 2.0;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f64> = (0..len)
        .map(|i| {
            let x = i as f64 - center;
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// Scale the color channels by the per-pixel weight, truncating like
/// an integer store. Alpha is left alone.
fn apply_vignette(data: &mut [u8], weights: &[f32]) {
    for (px, &w) in data.chunks_exact_mut(4).zip(weights) {
        for c in &mut px[..3] {
            *c = (f32::from(*c) * w) as u8;
        }
    }
}

/// Weighted add of two equal-length buffers, `(1 - t)*a + t*b`.
fn blend_weighted(a: &[u8], b: &[u8], t: f32) -> TraceResult<Vec<u8>> {
    if a.len() != b.len() {
        return Err(TraceError::render("blend inputs differ in length"));
    }
    let inv = 1.0 - t;
    Ok(a.iter()
        .zip(b)
        .map(|(&x, &y)| (inv * f32::from(x) + t * f32::from(y)).round() as u8)
        .collect())
}
