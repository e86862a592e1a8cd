//! Structure of the student dashboard page and the elements the controller
//! binds to.

use super::{
    document::{NodeId, PageDocument},
    error::PageError,
    selector::Selector,
};

pub const HAMBURGER: &str = "#hamburger";
pub const SIDEBAR: &str = ".sidebar";
pub const PROFILE_ICON: &str = ".profile-icon";
pub const PROFILE_DROPDOWN: &str = ".profile-dropdown";
pub const JOIN_CLASS_BUTTON: &str = "#joinClassBtn";
pub const MODAL: &str = "#modal";
pub const CLOSE_MODAL: &str = "#closeModal";
pub const CANCEL_BUTTON: &str = "#cancelBtn";
pub const JOIN_CLASS_FORM: &str = "#joinClassForm";
pub const CLASS_CODE_INPUT: &str = "#classCode";
pub const CARDS_CONTAINER: &str = "#cards-container";

/// Handles to every element the interaction controller listens on or
/// mutates, acquired once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardElements {
    pub hamburger: NodeId,
    pub sidebar: NodeId,
    pub profile_icon: NodeId,
    pub profile_dropdown: NodeId,
    pub join_class_button: NodeId,
    /// The full-screen backdrop; modal content is a descendant.
    pub modal: NodeId,
    pub close_modal: NodeId,
    pub cancel_button: NodeId,
    pub join_class_form: NodeId,
    pub class_code_input: NodeId,
    pub cards_container: NodeId,
}

impl DashboardElements {
    /// Looks up every element, failing on the first one that is missing.
    pub fn bind<D>(document: &D) -> Result<Self, PageError>
    where
        D: PageDocument + ?Sized,
    {
        let find = |raw: &str| -> Result<NodeId, PageError> {
            let selector: Selector = raw.parse()?;
            document
                .query(&selector)
                .ok_or_else(|| PageError::MissingElement {
                    selector: raw.to_owned(),
                })
        };

        Ok(Self {
            hamburger: find(HAMBURGER)?,
            sidebar: find(SIDEBAR)?,
            profile_icon: find(PROFILE_ICON)?,
            profile_dropdown: find(PROFILE_DROPDOWN)?,
            join_class_button: find(JOIN_CLASS_BUTTON)?,
            modal: find(MODAL)?,
            close_modal: find(CLOSE_MODAL)?,
            cancel_button: find(CANCEL_BUTTON)?,
            join_class_form: find(JOIN_CLASS_FORM)?,
            class_code_input: find(CLASS_CODE_INPUT)?,
            cards_container: find(CARDS_CONTAINER)?,
        })
    }
}

/// Builds the dashboard structure under the document body.
pub fn build_dashboard_page<D>(document: &mut D) -> Result<(), PageError>
where
    D: PageDocument + ?Sized,
{
    let body = document.body();

    let header = append(document, body, "header", &[".top-bar"], "")?;
    append(document, header, "span", &[HAMBURGER, ".hamburger"], "☰")?;
    append(document, header, "h1", &[".brand"], "EduBridge")?;
    let profile = append(document, header, "div", &[".profile-wrapper"], "")?;
    append(document, profile, "div", &[PROFILE_ICON], "Profile")?;
    let dropdown = append(document, profile, "div", &[PROFILE_DROPDOWN], "")?;
    for label in ["My Profile", "Settings", "Logout"] {
        append(document, dropdown, "a", &[".dropdown-item"], label)?;
    }

    let sidebar = append(document, body, "nav", &[SIDEBAR], "")?;
    for label in ["Classes", "Calendar", "Quiz Results", "Settings"] {
        append(document, sidebar, "a", &[".sidebar-link"], label)?;
    }

    let main = append(document, body, "main", &[".main-content"], "")?;
    append(document, main, "button", &[JOIN_CLASS_BUTTON], "Join Class")?;
    append(document, main, "div", &[CARDS_CONTAINER, ".cards-container"], "")?;

    let modal = append(document, body, "div", &[MODAL, ".modal"], "")?;
    let content = append(document, modal, "div", &[".modal-content"], "")?;
    append(document, content, "span", &[CLOSE_MODAL, ".close"], "×")?;
    append(document, content, "h2", &[], "Join Class")?;
    let form = append(document, content, "form", &[JOIN_CLASS_FORM], "")?;
    append(document, form, "label", &[], "Class code")?;
    append(document, form, "input", &[CLASS_CODE_INPUT], "")?;
    let actions = append(document, form, "div", &[".form-actions"], "")?;
    append(document, actions, "button", &[CANCEL_BUTTON], "Cancel")?;
    append(document, actions, "button", &[".submit-btn"], "Join")?;

    Ok(())
}

/// Creates an element tagged with `#id` / `.class` markers and appends it.
fn append<D>(
    document: &mut D,
    parent: NodeId,
    tag: &str,
    markers: &[&str],
    text: &str,
) -> Result<NodeId, PageError>
where
    D: PageDocument + ?Sized,
{
    let node = document.create_element(tag);
    for marker in markers {
        match marker.parse::<Selector>()? {
            Selector::Id(id) => document.set_id(node, &id)?,
            Selector::Class(class) => document.add_class(node, &class)?,
        }
    }
    if !text.is_empty() {
        document.set_text(node, text)?;
    }
    document.append_child(parent, node)?;
    Ok(node)
}
