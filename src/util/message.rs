/// Splits `text` into chunks of at most `limit` characters.
///
/// Splits happen at line boundaries wherever possible so digest lines stay intact; a
/// single line longer than `limit` is cut into `limit`-sized pieces. Chunks containing only
/// whitespace are dropped because Discord rejects empty messages.
///
/// # Arguments
/// - `text` - Message text, possibly multi-line
/// - `limit` - Maximum characters per chunk, must be non-zero
///
/// # Returns
/// - `Vec<String>` - Chunks in order; joining them with `\n` restores the non-blank lines
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut has_content = false;

    for line in text.split('\n') {
        let line_len = line.chars().count();

        if line_len > limit {
            if has_content {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
                has_content = false;
            }

            let chars: Vec<char> = line.chars().collect();
            chunks.extend(chars.chunks(limit).map(|piece| piece.iter().collect::<String>()));
            continue;
        }

        if has_content && current_len + 1 + line_len > limit {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
            has_content = false;
        }

        if has_content {
            current.push('\n');
            current_len += 1;
        }
        current.push_str(line);
        current_len += line_len;
        has_content = true;
    }

    if has_content {
        chunks.push(current);
    }

    chunks.retain(|chunk| !chunk.trim().is_empty());
    chunks
}
