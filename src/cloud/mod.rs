//! Word-cloud rendering - frequencies, layout, rasterization

pub mod frequency;
pub mod layout;
pub mod render;

/// File name for a decade's cloud image (e.g. "1990s.png").
pub fn image_filename(decade: i32) -> String {
    format!("{}s.png", decade)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_filename() {
        assert_eq!(image_filename(1990), "1990s.png");
        assert_eq!(image_filename(2020), "2020s.png");
    }
}
