use super::*;

#[test]
fn test_detect_heading_empty() {
    assert_eq!(detect_heading(""), SENTINEL_HEADING);
    assert_eq!(detect_heading("   "), SENTINEL_HEADING);
}

#[test]
fn test_detect_heading_strips_bullets() {
    assert_eq!(detect_heading("- Water Sports"), "Water Sports");
    assert_eq!(detect_heading("• City Exploration"), "City Exploration");
    assert_eq!(detect_heading("–  Tips and Tricks"), "Tips and Tricks");
    assert_eq!(detect_heading("— Nightlife"), "Nightlife");
    assert_eq!(detect_heading("*Packing List"), "Packing List");
}

#[test]
fn test_detect_heading_strips_only_one_bullet() {
    assert_eq!(detect_heading("-- Water Sports"), SENTINEL_HEADING);
}

#[test]
fn test_detect_heading_too_short() {
    assert_eq!(detect_heading("Hi"), SENTINEL_HEADING);
    assert_eq!(detect_heading("Abc"), SENTINEL_HEADING);
    assert_eq!(detect_heading("Abcd"), "Abcd");
}

#[test]
fn test_detect_heading_must_start_with_letter() {
    assert_eq!(detect_heading("2024 Highlights"), SENTINEL_HEADING);
    assert_eq!(detect_heading("&Food"), SENTINEL_HEADING);
}

#[test]
fn test_detect_heading_allowed_characters() {
    assert_eq!(detect_heading("Food & Wine"), "Food & Wine");
    assert_eq!(detect_heading("Day-Trips 2"), "Day-Trips 2");
    assert_eq!(detect_heading("Restaurants: Nice"), SENTINEL_HEADING);
    assert_eq!(detect_heading("Where to eat?"), SENTINEL_HEADING);
}

#[test]
fn test_detect_heading_trims_surrounding_whitespace() {
    assert_eq!(detect_heading("   Coastal Adventures   "), "Coastal Adventures");
}

#[test]
fn test_detect_heading_is_idempotent() {
    for line in [
        "",
        "Hi",
        "- Water Sports",
        "• City Exploration",
        "Food & Wine",
        "Comprehensive Guide to Major Cities",
        "not a heading.",
    ] {
        let once = detect_heading(line);
        assert_eq!(detect_heading(once), once, "input: {:?}", line);
    }
}

#[test]
fn test_split_page_with_heading() {
    let page = "City Exploration\n\nVisit the old town and harbor markets";
    let section = split_page(page);
    assert_eq!(section.heading, "City Exploration");
    assert_eq!(section.body, "Visit the old town and harbor markets");
}

#[test]
fn test_split_page_uses_first_line_of_head_block() {
    let page = "Coastal Adventures\nsubtitle line\n\nBody text here.";
    let section = split_page(page);
    assert_eq!(section.heading, "Coastal Adventures");
    assert_eq!(section.body, "Body text here.");
}

#[test]
fn test_split_page_without_blank_line() {
    let page = "Just a paragraph of text\nwith two lines";
    let section = split_page(page);
    assert_eq!(section.heading, SENTINEL_HEADING);
    assert_eq!(section.body, page);
}

#[test]
fn test_split_page_only_first_blank_line_splits() {
    let page = "Nightlife\n\nFirst block.\n\nSecond block.";
    let section = split_page(page);
    assert_eq!(section.heading, "Nightlife");
    assert_eq!(section.body, "First block.\n\nSecond block.");
}

#[test]
fn test_split_page_heading_only_becomes_body() {
    // Trailing blank lines are trimmed away before splitting.
    let page = "Conclusion\n\n   \n";
    let section = split_page(page);
    assert_eq!(section.heading, SENTINEL_HEADING);
    assert_eq!(section.body, "Conclusion");
    assert!(!section.is_empty());
}

#[test]
fn test_split_page_trims_outer_whitespace() {
    let page = "\n\n  History\n\nRoman ruins.\n\n";
    let section = split_page(page);
    assert_eq!(section.heading, "History");
    assert_eq!(section.body, "Roman ruins.");
}

#[test]
fn test_split_page_blank() {
    let section = split_page("   \n\n  ");
    assert_eq!(section.heading, SENTINEL_HEADING);
    assert!(section.is_empty());
}

#[test]
fn test_blank_line_segmenter_yields_one_section() {
    let segmenter = BlankLineSegmenter;
    let sections: Vec<_> = segmenter.segment("Cuisine\n\nTry the bouillabaisse.").collect();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].heading, "Cuisine");
}

#[test]
fn test_blank_line_segmenter_is_restartable() {
    let segmenter = BlankLineSegmenter;
    let iter = segmenter.segment("Cuisine\n\nTry the bouillabaisse.");
    let first: Vec<_> = iter.clone().collect();
    let second: Vec<_> = iter.collect();
    assert_eq!(first, second);
}
