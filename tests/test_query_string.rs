use openapi_qs::{ArrayFormat, Config, QueryParams, Style, Value};

fn request() -> QueryParams {
    let filter: Value = [
        ("status", Value::from("open now")),
        ("labels", Value::from(vec!["bug", "ui"])),
    ]
    .into_iter()
    .collect();

    let mut params = QueryParams::new();
    params
        .encode("filter", &filter, Style::DeepObject, true)
        .encode("ids", &Value::from(vec![3, 4, 5]), Style::Form, true)
        .encode("sort", &Value::from(vec!["a b", "c"]), Style::Form, false)
        .encode("fields", &Value::from(vec!["x", "y"]), Style::PipeDelimited, false)
        .encode("page", &Value::from(2), Style::Form, true);
    params
}

#[test]
fn assembled_with_defaults() {
    let config = Config::new().use_form_encoding(false);
    insta::assert_snapshot!(
        config.serialize_params(&request()),
        @"filter[status]=open+now&filter[labels][0]=bug&filter[labels][1]=ui&ids=3&ids=4&ids=5&sort=a+b,c&fields=x|y&page=2"
    );
}

#[test]
fn assembled_with_form_encoding() {
    let config = Config::new()
        .use_form_encoding(true)
        .array_format(ArrayFormat::Indexed)
        .question_mark(true);
    insta::assert_snapshot!(
        config.serialize_params(&request()),
        @"?filter%5Bstatus%5D=open%20now&filter%5Blabels%5D%5B0%5D=bug&filter%5Blabels%5D%5B1%5D=ui&ids%5B0%5D=3&ids%5B1%5D=4&ids%5B2%5D=5&sort=a+b,c&fields=x|y&page=2"
    );
}

#[test]
fn style_encoded_values_are_not_escaped_again() {
    let mut params = QueryParams::new();
    params.encode("q", &Value::from(vec!["50%", "a&b"]), Style::SpaceDelimited, false);
    params.encode("raw", &Value::from("50% a&b"), Style::Form, true);
    insta::assert_snapshot!(
        params.to_url_suffix(),
        @"?q=50%25%20a%26b&raw=50%25+a%26b"
    );
}

#[test]
fn empty_request() {
    let params = QueryParams::new();
    assert_eq!(params.to_query_string(), "");
    assert_eq!(params.to_url_suffix(), "");
}

#[test]
fn overwritten_key_keeps_first_position() {
    let mut params = QueryParams::new();
    params
        .encode("a", &Value::from(1), Style::Form, true)
        .encode("b", &Value::from(2), Style::Form, true)
        .encode("a", &Value::from(vec![7, 8]), Style::PipeDelimited, false);
    assert_eq!(
        Config::new().use_form_encoding(false).serialize_params(&params),
        "a=7|8&b=2"
    );
}
