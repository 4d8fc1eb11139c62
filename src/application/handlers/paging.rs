//! Splitting long replies into platform-sized messages

use crate::domain::entities::MAX_MESSAGE_LEN;

/// Concatenate `header` and `blocks` into as few messages as possible.
///
/// A block is never split across messages unless it alone exceeds the limit,
/// in which case it is cut on character boundaries. No text is dropped.
pub fn paginate(header: &str, blocks: &[String]) -> Vec<String> {
    paginate_with_limit(header, blocks, MAX_MESSAGE_LEN)
}

pub fn paginate_with_limit(header: &str, blocks: &[String], limit: usize) -> Vec<String> {
    let mut pages = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for block in std::iter::once(header).chain(blocks.iter().map(String::as_str)) {
        let block_len = block.chars().count();
        if current_len + block_len <= limit {
            current.push_str(block);
            current_len += block_len;
            continue;
        }

        if !current.is_empty() {
            pages.push(std::mem::take(&mut current));
        }

        let mut chunks = split_chars(block, limit);
        // Last chunk stays open so following blocks can join it
        if let Some(last) = chunks.pop() {
            pages.extend(chunks);
            current_len = last.chars().count();
            current = last;
        } else {
            current_len = 0;
        }
    }

    if !current.is_empty() {
        pages.push(current);
    }
    pages
}

fn split_chars(text: &str, limit: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(limit.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}
