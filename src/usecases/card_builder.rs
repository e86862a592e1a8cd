use crate::{
    domain::class_card::{ClassCard, INSTRUCTOR_PLACEHOLDER, VIEW_CLASS_LABEL},
    page::{NodeId, PageDocument, PageError},
};

pub const CARD_CLASS: &str = "card";
pub const OPACITY: &str = "opacity";
pub const HIDDEN_OPACITY: &str = "0";
pub const VISIBLE_OPACITY: &str = "1";

/// Builds the detached element tree for `card`, starting transparent.
///
/// The "View Class" button gets no listener.
pub fn build_card_element<D>(document: &mut D, card: &ClassCard) -> Result<NodeId, PageError>
where
    D: PageDocument + ?Sized,
{
    let root = element(document, "div", CARD_CLASS, "")?;
    document.set_style(root, "--i", &card.stagger_index().to_string())?;
    document.set_style(root, OPACITY, HIDDEN_OPACITY)?;

    let header = element(document, "div", "card-header", "")?;
    document.set_style(
        header,
        "background-image",
        &format!("url('{}')", card.header_image()),
    )?;
    let title = document.create_element("h2");
    document.set_text(title, &card.title())?;
    document.append_child(header, title)?;
    document.append_child(root, header)?;

    let content = element(document, "div", "card-content", "")?;
    let instructor = document.create_element("p");
    document.set_text(instructor, INSTRUCTOR_PLACEHOLDER)?;
    document.append_child(content, instructor)?;
    let info = element(document, "div", "card-info", "")?;
    for line in card.info_lines() {
        let row = document.create_element("div");
        document.set_text(row, &line)?;
        document.append_child(info, row)?;
    }
    document.append_child(content, info)?;
    document.append_child(root, content)?;

    let actions = element(document, "div", "card-actions", "")?;
    let button = element(document, "button", "visit-btn", VIEW_CLASS_LABEL)?;
    document.append_child(actions, button)?;
    document.append_child(root, actions)?;

    Ok(root)
}

fn element<D>(document: &mut D, tag: &str, class: &str, text: &str) -> Result<NodeId, PageError>
where
    D: PageDocument + ?Sized,
{
    let node = document.create_element(tag);
    document.add_class(node, class)?;
    if !text.is_empty() {
        document.set_text(node, text)?;
    }
    Ok(node)
}
