use super::common::*;
use crate::checklist::answer::{AnswerImage, AnswerValue};
use crate::checklist::validate::answer::check_image_encoding;
use crate::checklist::validate::{validate_answer, validate_template, ValidationCode};

#[test]
fn complete_answer_is_valid() {
    let template = inspection_template();
    let validated = validate_template(&template).expect("template valid");

    let mut answer = answer()
        .with("q1", "Item 1")
        .with("oven", "other")
        .with("fridge", selections(&["Item 2"]))
        .with("q2", selections(&["Item 1", "Item 3"]));
    answer.set_comment("oven", "door hinge loose");
    answer.attach_images("q2", vec![photo("tub.png"), photo("drain.png")]);

    validated
        .validate_answer(&answer)
        .expect("complete answer passes");
}

#[test]
fn missing_or_empty_required_answers_are_reported() {
    let template = inspection_template();
    let validated = validate_template(&template).expect("template valid");

    let errors = validated
        .validate_answer(&answer())
        .expect_err("q1 missing");
    assert_eq!(errors.codes(), vec![ValidationCode::MissingRequiredAnswer]);
    assert_eq!(errors.as_slice()[0].path, "q1");

    let errors = validated
        .validate_answer(&answer().with("q1", ""))
        .expect_err("q1 empty");
    assert_eq!(errors.codes(), vec![ValidationCode::MissingRequiredAnswer]);
}

#[test]
fn radio_group_values_must_match_a_choice() {
    let template = inspection_template();
    let validated = validate_template(&template).expect("template valid");

    let errors = validated
        .validate_answer(&answer().with("q1", "item 1"))
        .expect_err("values compare byte for byte");
    assert_eq!(errors.codes(), vec![ValidationCode::InvalidChoiceValue]);

    assert_eq!(errors.as_slice()[0].path, "q1");
}

#[test]
fn other_is_accepted_without_show_other_item() {
    let template = inspection_template();
    let validated = validate_template(&template).expect("template valid");

    let mut answer = answer().with("q1", "other");
    let errors = validated
        .validate_answer(&answer)
        .expect_err("comment missing");
    assert_eq!(errors.codes(), vec![ValidationCode::OtherWithoutComment]);
    assert_eq!(errors.as_slice()[0].path, "q1");

    answer.set_comment("q1", "broken");
    validated
        .validate_answer(&answer)
        .expect("other with a comment is valid");
}

#[test]
fn radio_group_other_requires_comment() {
    let template = inspection_template();
    let validated = validate_template(&template).expect("template valid");

    let mut answer = answer().with("q1", "Item 2").with("oven", "other");
    let errors = validated
        .validate_answer(&answer)
        .expect_err("comment missing");
    assert_eq!(errors.codes(), vec![ValidationCode::OtherWithoutComment]);
    assert_eq!(errors.as_slice()[0].path, "oven");

    answer.set_comment("oven", "");
    let errors = validated
        .validate_answer(&answer)
        .expect_err("comment empty");
    assert_eq!(errors.codes(), vec![ValidationCode::OtherWithoutComment]);

    answer.set_comment("oven", "pilot light out");
    validated
        .validate_answer(&answer)
        .expect("comment satisfies other");
}

#[test]
fn checkbox_selections_are_checked_element_wise() {
    let template = inspection_template();
    let validated = validate_template(&template).expect("template valid");

    let answer = answer()
        .with("q1", "Item 1")
        .with("fridge", selections(&["Item 1", "Item 7", "other", "other"]));

    let errors = validated
        .validate_answer(&answer)
        .expect_err("unknown value and missing comment");
    assert_eq!(
        errors.codes(),
        vec![
            ValidationCode::InvalidChoiceValue,
            ValidationCode::OtherWithoutComment
        ]
    );
    assert!(errors.iter().all(|error| error.path == "fridge"));
}

#[test]
fn value_shapes_must_match_question_kind() {
    let template = inspection_template();
    let validated = validate_template(&template).expect("template valid");

    let answer = answer()
        .with("q1", selections(&["Item 1"]))
        .with("fridge", "Item 1");

    let errors = validated
        .validate_answer(&answer)
        .expect_err("shapes swapped");
    assert_eq!(
        errors.codes(),
        vec![
            ValidationCode::InvalidChoiceValue,
            ValidationCode::InvalidChoiceValue
        ]
    );
    assert_eq!(errors.as_slice()[0].path, "q1");
    assert_eq!(errors.as_slice()[1].path, "fridge");
}

#[test]
fn empty_list_on_radio_group_is_a_wrong_shape() {
    let template = inspection_template();
    let validated = validate_template(&template).expect("template valid");

    let errors = validated
        .validate_answer(&answer().with("q1", "Item 1").with("oven", selections(&[])))
        .expect_err("oven takes a single value");
    assert_eq!(errors.codes(), vec![ValidationCode::InvalidChoiceValue]);
    assert_eq!(errors.as_slice()[0].path, "oven");

    validated
        .validate_answer(&answer().with("q1", "Item 1").with("fridge", selections(&[])))
        .expect("empty list leaves an optional checkbox unanswered");
}

#[test]
fn comment_keys_must_hold_text() {
    let template = inspection_template();
    let validated = validate_template(&template).expect("template valid");

    let answer = answer()
        .with("q1", "Item 1")
        .with("q1-Comment", selections(&["not", "text"]));

    let errors = validated
        .validate_answer(&answer)
        .expect_err("comment shape");
    assert_eq!(errors.codes(), vec![ValidationCode::MismatchedValueType]);
    assert_eq!(errors.as_slice()[0].path, "q1-Comment");
}

#[test]
fn images_are_only_accepted_where_enabled() {
    let template = inspection_template();
    let validated = validate_template(&template).expect("template valid");

    let mut answer = answer().with("q1", "Item 1");
    answer.attach_images("fridge", vec![photo("fridge.png")]);
    answer.attach_images("q1", vec![photo("counter.png")]);

    let errors = validated
        .validate_answer(&answer)
        .expect_err("uploads not enabled");
    assert_eq!(
        errors.codes(),
        vec![
            ValidationCode::UnexpectedImageUpload,
            ValidationCode::UnexpectedImageUpload
        ]
    );
    assert_eq!(errors.as_slice()[0].path, "q1-Image");
    assert_eq!(errors.as_slice()[1].path, "fridge-Image");
}

#[test]
fn image_keys_must_hold_images() {
    let template = inspection_template();
    let validated = validate_template(&template).expect("template valid");

    let answer = answer().with("q1", "Item 1").with("q2-Image", "tub.png");
    let errors = validated
        .validate_answer(&answer)
        .expect_err("image shape");
    assert_eq!(errors.codes(), vec![ValidationCode::MismatchedValueType]);

    let empty = crate::checklist::answer::ChecklistAnswer::new("a1", "t1")
        .with("q1", "Item 1")
        .with("fridge-Image", Vec::<String>::new());
    validated
        .validate_answer(&empty)
        .expect("an empty attachment list is no upload");
}

#[test]
fn image_encoding_is_checked_per_image() {
    let template = inspection_template();
    let validated = validate_template(&template).expect("template valid");

    let mut broken = photo("broken.png");
    broken.content = "not base64!".to_string();
    let mut answer = answer().with("q1", "Item 1");
    answer.attach_images("q2", vec![photo("tub.png"), broken]);

    let errors = validated
        .validate_answer(&answer)
        .expect_err("second image is broken");
    assert_eq!(errors.codes(), vec![ValidationCode::InvalidImageEncoding]);
    assert_eq!(errors.as_slice()[0].path, "q2-Image[1]");
    assert!(errors.as_slice()[0].message.contains("broken.png"));
}

#[test]
fn image_encoding_accepts_matching_data_urls() {
    let data_url = AnswerImage {
        name: "tub.png".to_string(),
        mime_type: "image/png".to_string(),
        content: format!("data:image/png;base64,{PNG_BASE64}"),
    };
    assert_eq!(check_image_encoding(&data_url), Ok(()));

    let mut mismatched = data_url.clone();
    mismatched.mime_type = "image/jpeg".to_string();
    let reason = check_image_encoding(&mismatched).expect_err("type mismatch");
    assert!(reason.contains("does not match"));

    let mut not_base64 = data_url.clone();
    not_base64.content = "data:image/png,rawbytes".to_string();
    assert!(check_image_encoding(&not_base64).is_err());

    let mut bad_type = photo("tub.png");
    bad_type.mime_type = "png".to_string();
    assert!(check_image_encoding(&bad_type).is_err());

    let mut empty = photo("tub.png");
    empty.content.clear();
    assert!(check_image_encoding(&empty).is_err());
}

#[test]
fn orphan_keys_are_reported_in_key_order() {
    let template = inspection_template();
    let validated = validate_template(&template).expect("template valid");

    let answer = answer()
        .with("q1", "Item 1")
        .with("q9", "Item 1")
        .with("q1-Notes", "stray")
        .with("appliances", "panel names hold no answers");

    let errors = validated
        .validate_answer(&answer)
        .expect_err("orphans present");
    let paths: Vec<&str> = errors.iter().map(|error| error.path.as_str()).collect();
    assert_eq!(paths, vec!["appliances", "q1-Notes", "q9"]);
    assert!(errors
        .iter()
        .all(|error| error.code == ValidationCode::OrphanAnswerKey));
}

#[test]
fn stray_comment_without_other_is_tolerated() {
    let template = inspection_template();
    let validated = validate_template(&template).expect("template valid");

    let mut answer = answer().with("q1", "Item 2");
    answer.set_comment("q1", "tenant mentioned a leak");

    validated
        .validate_answer(&answer)
        .expect("comments are kept even without other");
    assert_eq!(
        answer.get("q1-Comment"),
        Some(&AnswerValue::from("tenant mentioned a leak"))
    );
}

#[test]
fn answer_validation_requires_a_valid_template() {
    let broken = template(vec![page("kitchen", vec![radio("q1", true), radio("q1", true)])]);

    let errors = validate_answer(&broken, &answer().with("q1", "Item 1"))
        .expect_err("template errors surface first");
    assert_eq!(errors.codes(), vec![ValidationCode::DuplicateName]);
}
