//! Page geometry. A tall capture is never sliced: each page shows the whole image
//! shifted up by one more page height, clipped to the page.

/// Physical page size in PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

/// US Letter, portrait.
pub const LETTER: PageSize = PageSize {
    width: 612.0,
    height: 792.0,
};

/// Where the captured image lands on each page.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    pub page: PageSize,
    /// Image height once scaled to the page width.
    pub image_height: f64,
    /// Vertical offset of the image's top edge from each page's top edge (0 or negative).
    pub offsets: Vec<f64>,
}

impl PagePlan {
    pub fn page_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Plans pages for a `width` x `height` pixel image scaled to the page width.
pub fn paginate(width: u32, height: u32, page: PageSize) -> PagePlan {
    let image_height = f64::from(height) * page.width / f64::from(width.max(1));
    let mut offsets = vec![0.0];
    let mut position = 0.0;
    let mut remaining = image_height - page.height;
    while remaining > 0.0 {
        position -= page.height;
        offsets.push(position);
        remaining -= page.height;
    }
    PagePlan {
        page,
        image_height,
        offsets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_image_fits_one_page() {
        let plan = paginate(816, 600, LETTER);
        assert_eq!(plan.offsets, vec![0.0]);
        assert_eq!(plan.image_height, 450.0);
    }

    #[test]
    fn test_exact_page_height_is_one_page() {
        // 816 px wide scales by 0.75, so 1056 px is exactly 792 pt.
        let plan = paginate(816, 1056, LETTER);
        assert_eq!(plan.page_count(), 1);
    }

    #[test]
    fn test_tall_image_gets_negative_offsets() {
        let plan = paginate(100, 300, LETTER);
        assert_eq!(plan.image_height, 1836.0);
        assert_eq!(plan.offsets, vec![0.0, -792.0, -1584.0]);
    }

    #[test]
    fn test_one_point_over_spills_to_second_page() {
        // 1057 px at 0.75 is 792.75 pt.
        let plan = paginate(816, 1057, LETTER);
        assert_eq!(plan.offsets, vec![0.0, -792.0]);
    }

    #[test]
    fn test_every_page_shows_part_of_the_image() {
        let plan = paginate(1632, 9000, LETTER);
        for offset in &plan.offsets {
            assert!(-offset < plan.image_height);
        }
        let last = plan.offsets.last().copied().unwrap_or_default();
        assert!(plan.image_height + last <= LETTER.height);
    }
}
