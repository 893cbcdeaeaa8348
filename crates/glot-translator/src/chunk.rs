//! Deterministic splitting of oversized text into translatable chunks.
//!
//! Paragraphs (blank-line separated) are accumulated in input order; a
//! paragraph that alone exceeds the budget falls back to sentence
//! accumulation with space joins. Lengths count Unicode scalar values.

/// Split text into ordered chunks of at most `chunk_size` characters.
///
/// The only chunk that can exceed the budget is a single sentence with no
/// terminal punctuation to split on; callers treat that case as
/// untranslatable.
pub fn split_chunks(text: &str, chunk_size: usize) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for paragraph in text.split("\n\n") {
        let paragraph_len = paragraph.chars().count();

        if paragraph_len > chunk_size {
            flush(&mut chunks, &mut current, &mut current_len);

            for sentence in split_sentences(paragraph) {
                let sentence_len = sentence.chars().count();
                if current_len + sentence_len + 2 <= chunk_size {
                    current.push_str(sentence);
                    current.push(' ');
                    current_len += sentence_len + 1;
                } else {
                    flush(&mut chunks, &mut current, &mut current_len);
                    current.push_str(sentence);
                    current.push(' ');
                    current_len = sentence_len + 1;
                }
            }
        } else if current_len + paragraph_len + 2 <= chunk_size {
            current.push_str(paragraph);
            current.push_str("\n\n");
            current_len += paragraph_len + 2;
        } else {
            flush(&mut chunks, &mut current, &mut current_len);
            current.push_str(paragraph);
            current.push_str("\n\n");
            current_len = paragraph_len + 2;
        }
    }

    if !current.trim().is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks
}

fn flush(chunks: &mut Vec<String>, current: &mut String, current_len: &mut usize) {
    if !current.is_empty() {
        chunks.push(current.trim().to_string());
        current.clear();
        *current_len = 0;
    }
}

/// Split on runs of terminal punctuation, trimming and dropping empties
fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}
