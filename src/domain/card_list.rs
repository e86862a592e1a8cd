use super::class_card::ClassCard;

/// Append-only list of cards shown on the dashboard for this session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardList {
    cards: Vec<ClassCard>,
}

impl CardList {
    pub fn cards(&self) -> &[ClassCard] {
        &self.cards
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Appends a card and returns its position.
    pub fn push(&mut self, card: ClassCard) -> usize {
        self.cards.push(card);
        self.cards.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&ClassCard> {
        self.cards.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::class_card::HEADER_IMAGES;

    #[test]
    fn default_list_is_empty() {
        let list = CardList::default();

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut list = CardList::default();

        for (index, code) in ["A1", "B2", "C3"].into_iter().enumerate() {
            assert_eq!(list.push(ClassCard::new(code, HEADER_IMAGES[0], index)), index);
        }

        let codes: Vec<_> = list.cards().iter().map(ClassCard::code).collect();
        assert_eq!(codes, ["A1", "B2", "C3"]);
        assert_eq!(list.get(2).map(ClassCard::stagger_index), Some(2));
        assert_eq!(list.len(), 3);
    }
}
