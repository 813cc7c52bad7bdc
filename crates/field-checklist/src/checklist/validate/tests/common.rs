use crate::checklist::answer::{AnswerImage, ChecklistAnswer};
use crate::checklist::template::{
    CheckboxQuestion, ChecklistPage, ChecklistTemplate, Choice, PageElement, PanelElement,
    RadioGroupQuestion,
};

pub(super) const PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

pub(super) fn yes_no() -> Vec<Choice> {
    vec![Choice::new("Item 1", "Yes"), Choice::new("Item 2", "No")]
}

pub(super) fn radio(name: &str, required: bool) -> PageElement {
    PageElement::RadioGroup(RadioGroupQuestion {
        name: name.to_string(),
        title: format!("{name} condition"),
        description: String::new(),
        is_required: required,
        choices: yes_no(),
        show_other_item: false,
    })
}

pub(super) fn radio_with_other(name: &str) -> PageElement {
    PageElement::RadioGroup(RadioGroupQuestion {
        name: name.to_string(),
        title: format!("{name} condition"),
        description: String::new(),
        is_required: false,
        choices: yes_no(),
        show_other_item: true,
    })
}

pub(super) fn checkbox(name: &str, show_other_item: bool, show_image_upload: bool) -> PageElement {
    PageElement::Checkbox(CheckboxQuestion {
        name: name.to_string(),
        title: format!("{name} findings"),
        description: String::new(),
        is_required: false,
        choices: vec![
            Choice::new("Item 1", "Water damage"),
            Choice::new("Item 2", "Mold"),
            Choice::new("Item 3", "Broken fixture"),
        ],
        show_other_item,
        show_image_upload,
    })
}

pub(super) fn panel(name: &str, elements: Vec<PageElement>) -> PageElement {
    PageElement::Panel(PanelElement {
        name: name.to_string(),
        title: format!("{name} group"),
        description: String::new(),
        elements,
    })
}

pub(super) fn page(name: &str, elements: Vec<PageElement>) -> ChecklistPage {
    ChecklistPage {
        name: name.to_string(),
        elements,
    }
}

pub(super) fn template(pages: Vec<ChecklistPage>) -> ChecklistTemplate {
    ChecklistTemplate {
        id: "t1".to_string(),
        title: "Unit turnover inspection".to_string(),
        description: "Walk-through performed before a unit is listed.".to_string(),
        pages,
    }
}

/// Kitchen page with a required radio, an inspection panel and a photo checkbox.
pub(super) fn inspection_template() -> ChecklistTemplate {
    template(vec![
        page(
            "kitchen",
            vec![
                radio("q1", true),
                panel(
                    "appliances",
                    vec![radio_with_other("oven"), checkbox("fridge", true, false)],
                ),
            ],
        ),
        page("bathroom", vec![checkbox("q2", true, true)]),
    ])
}

pub(super) fn answer() -> ChecklistAnswer {
    ChecklistAnswer::new("a1", "t1")
}

pub(super) fn photo(name: &str) -> AnswerImage {
    AnswerImage {
        name: name.to_string(),
        mime_type: "image/png".to_string(),
        content: PNG_BASE64.to_string(),
    }
}

pub(super) fn selections(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
