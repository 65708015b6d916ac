use confirmd::infrastructure::pdf::normalize_page_text;

#[test]
fn given_spaced_out_text_when_normalized_then_runs_collapse_to_single_spaces() {
    let raw = "AAPL    Buy   10\t\tshares";
    assert_eq!(normalize_page_text(raw), "AAPL Buy 10 shares");
}

#[test]
fn given_blank_line_runs_when_normalized_then_one_blank_line_remains() {
    let raw = "header\n\n\n\nbody line\n";
    assert_eq!(normalize_page_text(raw), "header\n\nbody line");
}

#[test]
fn given_padded_lines_when_normalized_then_edges_are_trimmed() {
    let raw = "   line one   \n   line two   ";
    assert_eq!(normalize_page_text(raw), "line one\nline two");
}

#[test]
fn given_empty_input_when_normalized_then_empty_output() {
    assert_eq!(normalize_page_text(""), "");
    assert_eq!(normalize_page_text("\n\n  \n"), "");
}
