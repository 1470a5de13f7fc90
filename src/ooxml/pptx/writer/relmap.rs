/// Relationship ID mapper for tracking relationships during presentation generation.
///
/// Relationships are created first and the mapper hands out the actual IDs
/// used when the slide XML is generated.
use std::collections::HashMap;

/// Maps presentation elements to their relationship IDs.
///
/// Organized per slide, as each slide has its own set of relationships. The
/// slide layout always takes `rId1` of a slide part, so pictures start at
/// `rId2`.
#[derive(Debug, Default)]
pub struct RelationshipMapper {
    /// Maps (slide_index, image_index_in_slide) to relationship ID
    image_ids: HashMap<(usize, usize), String>,
    /// Maps (slide_index, image_index_in_slide) to media part name
    image_parts: HashMap<(usize, usize), String>,
    /// Maps slide_index to the relationship ID in presentation.xml.rels
    slide_ids: HashMap<usize, String>,
}

impl RelationshipMapper {
    /// Create a new empty relationship mapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image relationship mapping for a specific slide.
    ///
    /// # Arguments
    /// * `slide_index` - The index of the slide (0-based)
    /// * `image_index_in_slide` - The index of the image within that slide (0-based)
    /// * `rel_id` - The relationship ID (e.g., "rId2")
    /// * `part_name` - The media part the relationship targets (e.g., "image1.png")
    pub fn add_image(
        &mut self,
        slide_index: usize,
        image_index_in_slide: usize,
        rel_id: String,
        part_name: String,
    ) {
        self.image_ids
            .insert((slide_index, image_index_in_slide), rel_id);
        self.image_parts
            .insert((slide_index, image_index_in_slide), part_name);
    }

    /// Get the relationship ID for an image in a specific slide.
    pub fn get_image_id(&self, slide_index: usize, image_index_in_slide: usize) -> Option<&str> {
        self.image_ids
            .get(&(slide_index, image_index_in_slide))
            .map(|s| s.as_str())
    }

    /// Get the media part name for an image in a specific slide.
    pub fn get_image_part(&self, slide_index: usize, image_index_in_slide: usize) -> Option<&str> {
        self.image_parts
            .get(&(slide_index, image_index_in_slide))
            .map(|s| s.as_str())
    }

    /// Add the presentation-level relationship ID of a slide.
    pub fn add_slide(&mut self, slide_index: usize, rel_id: String) {
        self.slide_ids.insert(slide_index, rel_id);
    }

    /// Get the presentation-level relationship ID of a slide.
    pub fn get_slide_id(&self, slide_index: usize) -> Option<&str> {
        self.slide_ids.get(&slide_index).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_per_slide() {
        let mut map = RelationshipMapper::new();
        map.add_image(0, 0, "rId2".to_string(), "image1.png".to_string());
        map.add_image(1, 0, "rId2".to_string(), "image2.jpeg".to_string());
        map.add_slide(1, "rId8".to_string());

        assert_eq!(map.get_image_id(1, 0), Some("rId2"));
        assert_eq!(map.get_image_part(1, 0), Some("image2.jpeg"));
        assert_eq!(map.get_image_id(1, 1), None);
        assert_eq!(map.get_slide_id(1), Some("rId8"));
        assert_eq!(map.get_slide_id(0), None);
    }
}
