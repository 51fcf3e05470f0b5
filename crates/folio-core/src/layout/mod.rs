pub mod render;

/// Fixed page geometry, A4 portrait, millimetres. These are layout policy,
/// not runtime configuration.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
/// Left, right and top page margin.
pub const MARGIN_MM: f32 = 10.0;
pub const BOTTOM_MARGIN_MM: f32 = 15.0;

/// Cards per row. The card width follows from it.
pub const COLS: usize = 3;
pub const CARD_WIDTH_MM: f32 = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / COLS as f32;
pub const CARD_HEIGHT_MM: f32 = 55.0;
pub const IMAGE_HEIGHT_MM: f32 = 35.0;
pub const ROW_GAP_MM: f32 = 5.0;
/// Inset between the card boundary and its image/text content.
pub const CARD_PADDING_MM: f32 = 2.0;

/// Vertical space reserved for the repeating page heading, below the top
/// margin. The first card row starts under it on every page.
pub const HEADING_BLOCK_MM: f32 = 15.0;
pub const CONTENT_TOP_MM: f32 = MARGIN_MM + HEADING_BLOCK_MM;

/// Longest-edge bound applied to fetched images before embedding.
pub const MAX_IMAGE_EDGE_PX: u32 = 500;

/// Name wrapping budget: lines of at most this many characters.
pub const NAME_WRAP_CHARS: usize = 30;
pub const NAME_MAX_LINES: usize = 3;

/// Where one card goes: page index and cell position, `y` measured from the
/// top edge of the page to the top of the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSlot {
    pub index: usize,
    pub page: usize,
    pub row: usize,
    pub col: usize,
    pub x: f32,
    pub y: f32,
}

/// Complete grid plan for one catalog: every record gets exactly one slot,
/// in input order, row-major.
#[derive(Debug, Clone)]
pub struct CatalogPlan {
    pub slots: Vec<CardSlot>,
    pub row_count: usize,
    pub page_count: usize,
}

/// Number of card rows that fit between the heading and the bottom margin.
pub fn rows_per_page() -> usize {
    let available = PAGE_HEIGHT_MM - CONTENT_TOP_MM - BOTTOM_MARGIN_MM;
    // First row costs CARD_HEIGHT_MM, each further row a gap on top of that.
    if available < CARD_HEIGHT_MM {
        return 0;
    }
    1 + ((available - CARD_HEIGHT_MM) / (CARD_HEIGHT_MM + ROW_GAP_MM)) as usize
}

/// Assign a grid cell to each of `n` records.
///
/// A new page starts whenever the next row would cross the bottom margin,
/// never mid-row. For n records this yields ceil(n / COLS) rows and
/// ceil(rows / rows_per_page) pages.
pub fn plan_cards(n: usize) -> CatalogPlan {
    let per_page = rows_per_page();
    debug_assert!(per_page > 0);

    let mut slots = Vec::with_capacity(n);
    for index in 0..n {
        let row = index / COLS;
        let col = index % COLS;
        let page = row / per_page;
        let row_on_page = row % per_page;
        slots.push(CardSlot {
            index,
            page,
            row,
            col,
            x: MARGIN_MM + col as f32 * CARD_WIDTH_MM,
            y: CONTENT_TOP_MM + row_on_page as f32 * (CARD_HEIGHT_MM + ROW_GAP_MM),
        });
    }

    let row_count = n.div_ceil(COLS);
    let page_count = row_count.div_ceil(per_page);

    CatalogPlan {
        slots,
        row_count,
        page_count,
    }
}

/// Greedy word wrap into at most `max_lines` lines of `max_chars`.
///
/// Words that do not fit on the last permitted line are dropped; a single
/// word longer than the budget is hard-split. Lossy truncation is the
/// accepted behavior, overflowing the card is not.
pub fn wrap_name(text: &str, max_chars: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    'words: for word in text.split_whitespace() {
        let mut word = word;
        // Hard-split words longer than a whole line
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                if lines.len() == max_lines {
                    break 'words;
                }
            }
            let split_at = word
                .char_indices()
                .nth(max_chars)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            lines.push(word[..split_at].to_string());
            if lines.len() == max_lines {
                break 'words;
            }
            word = &word[split_at..];
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            if lines.len() == max_lines {
                break;
            }
            current.push_str(word);
        }
    }

    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_rows_fit_per_page() {
        // 297 - 25 (heading) - 15 (bottom) = 257 mm; rows advance by 60 mm
        assert_eq!(rows_per_page(), 4);
    }

    #[test]
    fn plan_counts_match_geometry() {
        let plan = plan_cards(4);
        assert_eq!(plan.slots.len(), 4);
        assert_eq!(plan.row_count, 2);
        assert_eq!(plan.page_count, 1);

        // 12 cards exactly fill one page, the 13th spills over
        assert_eq!(plan_cards(12).page_count, 1);
        let plan = plan_cards(13);
        assert_eq!(plan.page_count, 2);
        assert_eq!(plan.slots[12].page, 1);
        assert_eq!(plan.slots[12].y, CONTENT_TOP_MM);
    }

    #[test]
    fn slots_are_row_major_in_input_order() {
        let plan = plan_cards(5);
        assert_eq!(plan.slots[0].x, MARGIN_MM);
        assert_eq!(plan.slots[0].y, CONTENT_TOP_MM);
        assert_eq!(plan.slots[1].col, 1);
        assert_eq!(plan.slots[2].col, 2);
        // Fourth card wraps to column 0 of the next row
        assert_eq!(plan.slots[3].col, 0);
        assert_eq!(
            plan.slots[3].y,
            CONTENT_TOP_MM + CARD_HEIGHT_MM + ROW_GAP_MM
        );
        assert_eq!(plan.slots[4].x, MARGIN_MM + CARD_WIDTH_MM);
    }

    #[test]
    fn plan_is_deterministic() {
        let a = plan_cards(7);
        let b = plan_cards(7);
        assert_eq!(a.slots, b.slots);
        assert_eq!(a.page_count, b.page_count);
    }

    #[test]
    fn wrap_short_name_single_line() {
        assert_eq!(wrap_name("Widget A", 30, 3), vec!["Widget A"]);
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let lines = wrap_name("Stainless Steel Milk Can 40 Litre", 20, 3);
        assert_eq!(lines, vec!["Stainless Steel Milk", "Can 40 Litre"]);
    }

    #[test]
    fn wrap_truncates_past_line_budget() {
        let lines = wrap_name("one two three four five six seven eight", 9, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "one two");
        assert_eq!(lines[1], "three");
    }

    #[test]
    fn wrap_hard_splits_long_word() {
        let lines = wrap_name("Pasteurizer3000UltraMax", 10, 3);
        assert_eq!(lines, vec!["Pasteurize", "r3000Ultra", "Max"]);
    }

    #[test]
    fn wrap_empty_name_is_empty() {
        assert!(wrap_name("   ", 30, 3).is_empty());
    }
}
