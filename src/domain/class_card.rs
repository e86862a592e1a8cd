use rand::Rng;

/// Header backgrounds a new card can be decorated with.
pub const HEADER_IMAGES: [&str; 4] = [
    "https://www.gstatic.com/classroom/themes/img_graduation.jpg",
    "https://www.gstatic.com/classroom/themes/img_code.jpg",
    "https://www.gstatic.com/classroom/themes/img_bookclub.jpg",
    "https://www.gstatic.com/classroom/themes/img_breakfast.jpg",
];

pub const INSTRUCTOR_PLACEHOLDER: &str = "Instructor: To be announced";
pub const VIEW_CLASS_LABEL: &str = "View Class";
const TO_BE_ANNOUNCED: &str = "TBA";

/// Picks one header image uniformly from [`HEADER_IMAGES`].
pub fn pick_header_image<R>(rng: &mut R) -> &'static str
where
    R: Rng + ?Sized,
{
    HEADER_IMAGES[rng.gen_range(0..HEADER_IMAGES.len())]
}

/// Visual record of one joined class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCard {
    code: String,
    header_image: &'static str,
    /// Number of cards present when this one was inserted; drives the
    /// animation stagger.
    stagger_index: usize,
}

impl ClassCard {
    pub fn new(code: impl Into<String>, header_image: &'static str, stagger_index: usize) -> Self {
        Self {
            code: code.into(),
            header_image,
            stagger_index,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn header_image(&self) -> &'static str {
        self.header_image
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn stagger_index(&self) -> usize {
        self.stagger_index
    }

    /// Card title with the class code interpolated verbatim.
    pub fn title(&self) -> String {
        format!("New Class {}", self.code)
    }

    /// Section, room and schedule lines, all placeholders for now.
    pub fn info_lines(&self) -> [String; 3] {
        [
            format!("Section: {TO_BE_ANNOUNCED}"),
            format!("Room: {TO_BE_ANNOUNCED}"),
            format!("Schedule: {TO_BE_ANNOUNCED}"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn title_interpolates_code_verbatim() {
        let card = ClassCard::new("<b>ABC123</b>", HEADER_IMAGES[0], 0);

        assert_eq!(card.title(), "New Class <b>ABC123</b>");
    }

    #[test]
    fn info_lines_are_placeholders() {
        let card = ClassCard::new("X", HEADER_IMAGES[1], 2);

        assert_eq!(
            card.info_lines(),
            [
                "Section: TBA".to_owned(),
                "Room: TBA".to_owned(),
                "Schedule: TBA".to_owned()
            ]
        );
        assert_eq!(card.stagger_index(), 2);
    }

    #[test]
    fn picked_image_is_always_one_of_the_fixed_set() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..200 {
            assert!(HEADER_IMAGES.contains(&pick_header_image(&mut rng)));
        }
    }

    #[test]
    fn seeded_sources_pick_the_same_images() {
        let mut first = ChaCha8Rng::seed_from_u64(42);
        let mut second = ChaCha8Rng::seed_from_u64(42);

        let a: Vec<_> = (0..16).map(|_| pick_header_image(&mut first)).collect();
        let b: Vec<_> = (0..16).map(|_| pick_header_image(&mut second)).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn every_image_is_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = [false; HEADER_IMAGES.len()];

        for _ in 0..400 {
            let image = pick_header_image(&mut rng);
            if let Some(index) = HEADER_IMAGES.iter().position(|url| *url == image) {
                seen[index] = true;
            }
        }

        assert!(seen.iter().all(|hit| *hit));
    }
}
