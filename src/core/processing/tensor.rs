//! Conversion between 8-bit RGB images and the float tensors the style
//! transfer network consumes.
//!
//! The network expects batched `[1, H, W, 3]` tensors with each channel
//! normalized to `[0, 1]`. Its output uses the same layout and is mapped
//! back to 8-bit RGB with clamping, so out-of-range activations never wrap.

use image::RgbImage;
use ndarray::Array4;

use crate::error::{Error, Result};

/// Normalize an RGB image into a `[1, H, W, 3]` float tensor in `[0, 1]`.
pub fn image_to_tensor(img: &RgbImage) -> Array4<f32> {
    let (cols, rows) = img.dimensions();
    Array4::from_shape_fn((1, rows as usize, cols as usize, 3), |(_, y, x, c)| {
        f32::from(img.get_pixel(x as u32, y as u32)[c]) / 255.0
    })
}

/// Map the first batch entry of a `[N, H, W, 3]` float tensor back to 8-bit
/// RGB. Values are scaled by 255 and clamped to `[0, 255]` before the cast.
pub fn tensor_to_image(tensor: &Array4<f32>) -> Result<RgbImage> {
    let shape = tensor.shape();
    let (batch, rows, cols, channels) = (shape[0], shape[1], shape[2], shape[3]);
    if batch == 0 || rows == 0 || cols == 0 || channels != 3 {
        return Err(Error::External(format!(
            "cannot render tensor of shape {shape:?} as an RGB image"
        )));
    }

    let mut data = Vec::with_capacity(rows * cols * 3);
    for y in 0..rows {
        for x in 0..cols {
            for c in 0..3 {
                let v = tensor[[0, y, x, c]] * 255.0;
                data.push(v.clamp(0.0, 255.0) as u8);
            }
        }
    }

    RgbImage::from_raw(cols as u32, rows as u32, data)
        .ok_or_else(|| Error::External("tensor buffer does not fill an RGB image".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use ndarray::Array4;

    #[test]
    fn tensor_has_batch_dim_and_unit_range() {
        let mut img = RgbImage::new(4, 3);
        img.put_pixel(0, 0, Rgb([255, 0, 128]));
        img.put_pixel(3, 2, Rgb([51, 102, 204]));

        let t = image_to_tensor(&img);
        assert_eq!(t.shape(), &[1, 3, 4, 3]);
        assert!((t[[0, 0, 0, 0]] - 1.0).abs() < 1e-6);
        assert_eq!(t[[0, 0, 0, 1]], 0.0);
        assert!((t[[0, 2, 3, 0]] - 51.0 / 255.0).abs() < 1e-6);
        assert!(t.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn image_round_trips_through_tensor() {
        let img = RgbImage::from_fn(7, 5, |x, y| Rgb([(x * 30) as u8, (y * 40) as u8, 77]));
        let back = tensor_to_image(&image_to_tensor(&img)).unwrap();
        assert_eq!(back.dimensions(), (7, 5));
        assert_eq!(back.as_raw(), img.as_raw());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut t = Array4::<f32>::zeros((1, 1, 2, 3));
        t[[0, 0, 0, 0]] = 1.7;
        t[[0, 0, 1, 1]] = -0.4;
        let img = tensor_to_image(&t).unwrap();
        assert_eq!(img.get_pixel(0, 0)[0], 255);
        assert_eq!(img.get_pixel(1, 0)[1], 0);
    }

    #[test]
    fn rejects_non_rgb_channel_count() {
        let t = Array4::<f32>::zeros((1, 2, 2, 4));
        assert!(tensor_to_image(&t).is_err());
    }
}
