mod cursor_lookahead;
mod parse_bad;
