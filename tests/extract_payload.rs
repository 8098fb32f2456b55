use plandag::extract_payload;

#[test]
fn strips_prose_around_payload() {
    let text = "Sure! Here is the plan:\n{\"tasks\":[]}\nLet me know if you need more.";
    assert_eq!(extract_payload(text), "{\"tasks\":[]}");
}

#[test]
fn takes_first_open_and_last_close_brace() {
    let text = "pre {\"tasks\":[{\"id\":\"a\",\"dependencies\":[]}]} post";
    assert_eq!(
        extract_payload(text),
        "{\"tasks\":[{\"id\":\"a\",\"dependencies\":[]}]}"
    );
}

#[test]
fn bare_payload_is_returned_whole() {
    let text = "{\"tasks\":[]}";
    assert_eq!(extract_payload(text), text);
}

#[test]
fn text_without_braces_is_returned_unchanged() {
    let text = "I could not come up with a plan.";
    assert_eq!(extract_payload(text), text);
}

#[test]
fn reversed_braces_are_returned_unchanged() {
    let text = "} nothing useful {";
    assert_eq!(extract_payload(text), text);
}

#[test]
fn only_an_opening_brace_is_returned_unchanged() {
    let text = "here it comes: {\"tasks\": [";
    assert_eq!(extract_payload(text), text);
}

#[test]
fn braces_in_prose_widen_the_cut() {
    // Known limitation: a brace in the trailing prose is included.
    let text = "plan: {\"tasks\":[]} (see {notes})";
    assert_eq!(extract_payload(text), "{\"tasks\":[]} (see {notes}");
}

#[test]
fn multibyte_prose_does_not_break_slicing() {
    let text = "计划如下：{\"tasks\":[]}。完成";
    assert_eq!(extract_payload(text), "{\"tasks\":[]}");
}
