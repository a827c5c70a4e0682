use forge_export::metrics::{encode, parse_words, text_width, wrap};
use forge_export::styles::{FontWeight, PageGeometry};

#[test]
fn encode_maps_win_ansi_and_replaces_the_rest() {
    assert_eq!(encode("café"), b"caf\xe9".to_vec());
    assert_eq!(encode("€5 – ok"), b"\x805 \x96 ok".to_vec());
    assert_eq!(encode("日本"), b"??".to_vec());
    assert_eq!(encode("a\tb"), b"a b".to_vec());
}

#[test]
fn widths_follow_helvetica_metrics() {
    // "Hi": H=722, i=222 in Helvetica; H=722, i=278 in bold.
    assert!((text_width("Hi", FontWeight::Regular, 10.0) - 9.44).abs() < 1e-4);
    assert!((text_width("Hi", FontWeight::Bold, 10.0) - 10.0).abs() < 1e-4);
}

#[test]
fn bold_markup_switches_weight() {
    let words = parse_words("a **big** deal", FontWeight::Regular);
    let weights: Vec<FontWeight> = words.iter().map(|w| w.weight).collect();
    assert_eq!(
        weights,
        [FontWeight::Regular, FontWeight::Bold, FontWeight::Regular]
    );
    assert_eq!(words[1].text, "big");
}

#[test]
fn unmatched_markup_stays_literal() {
    let words = parse_words("5 ** 2", FontWeight::Regular);
    let texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
    assert_eq!(texts, ["5", "**", "2"]);
}

#[test]
fn wrap_respects_width() {
    let words = parse_words(&"lorem ipsum ".repeat(40), FontWeight::Regular);
    let lines = wrap(words, 12.0, 200.0);
    assert!(lines.len() > 1);
    assert!(lines.iter().all(|l| l.width <= 200.0 + 1e-3));
}

#[test]
fn long_words_are_split() {
    let words = parse_words(&"x".repeat(400), FontWeight::Bold);
    let lines = wrap(words, 12.0, 100.0);
    assert!(lines.len() > 1);
    let joined: String = lines
        .iter()
        .flat_map(|l| l.words.iter().map(|w| w.text.as_str()))
        .collect();
    assert_eq!(joined.len(), 400);
}

#[test]
fn geometry_parses_aliases() {
    assert_eq!("A4".parse::<PageGeometry>().unwrap(), PageGeometry::Print);
    assert_eq!(
        "16:9".parse::<PageGeometry>().unwrap(),
        PageGeometry::Widescreen
    );
    assert!("letter".parse::<PageGeometry>().is_err());
    assert_eq!(PageGeometry::default(), PageGeometry::Print);
}
