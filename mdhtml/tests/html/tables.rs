//! Tables become GFM pipe tables

use super::md;

#[test]
fn test_table_with_header() {
    let html = concat!(
        "<table>",
        "<thead><tr><th>Name</th><th>Qty</th></tr></thead>",
        "<tbody><tr><td>Apple</td><td>3</td></tr><tr><td>Pear | Fig</td><td></td></tr></tbody>",
        "</table>"
    );
    assert_eq!(
        md(html),
        "| Name | Qty |\n| --- | --- |\n| Apple | 3 |\n| Pear \\| Fig |  |"
    );
}

#[test]
fn test_ragged_rows_are_padded() {
    assert_eq!(
        md("<table><tr><td>a</td></tr><tr><td>b</td><td>c</td></tr></table>"),
        "| a |  |\n| --- | --- |\n| b | c |"
    );
}

#[test]
fn test_figure_caption_and_breaks() {
    let html = concat!(
        "<figure class=\"wp-block-table\"><table>",
        "<caption>Totals</caption>",
        "<tr><td>x<br>y</td></tr>",
        "</table></figure>"
    );
    assert_eq!(md(html), "Totals\n\n| x<br>y |\n| --- |");
}

#[test]
fn test_table_between_paragraphs() {
    assert_eq!(
        md("<p>before</p><table><tr><td>1</td></tr></table><p>after</p>"),
        "before\n\n| 1 |\n| --- |\n\nafter"
    );
}
