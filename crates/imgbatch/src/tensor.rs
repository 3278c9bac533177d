//! Float tensor representation for decoded images
//!
//! Resolved images are handed to the host as independent tensors of
//! logical shape `(1, height, width, 3)` with RGB values scaled to
//! `[0.0, 1.0]`. Images are never resized or concatenated, so entries
//! with different dimensions coexist in one batch.

use image::DynamicImage;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One decoded image as a normalized RGB float buffer
///
/// Storage is row-major `(height, width, channel)` with a leading
/// singleton batch dimension in the logical shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ImageTensor {
    height: usize,
    width: usize,
    data: Vec<f32>,
}

impl ImageTensor {
    /// Convert a decoded image to a normalized RGB tensor
    ///
    /// Non-RGB inputs (grayscale, RGBA, palette) are converted to
    /// 8-bit RGB first; each channel is scaled by 1/255.
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        let data = rgb
            .pixels()
            .flat_map(|p| p.0.iter().map(|&c| c as f32 / 255.0))
            .collect();
        Self {
            height: height as usize,
            width: width as usize,
            data,
        }
    }

    /// Logical shape: `[1, height, width, 3]`
    pub fn shape(&self) -> [usize; 4] {
        [1, self.height, self.width, 3]
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// RGB triple at `(y, x)`
    ///
    /// # Panics
    /// Panics if `y >= height` or `x >= width`.
    pub fn pixel(&self, y: usize, x: usize) -> [f32; 3] {
        assert!(y < self.height && x < self.width, "pixel out of bounds");
        let offset = (y * self.width + x) * 3;
        [self.data[offset], self.data[offset + 1], self.data[offset + 2]]
    }

    /// Flat row-major pixel data, length `height * width * 3`
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}
