use phonetag_image::Argb;
use phonetag_segment::{
    ClassPalette, HIGHLIGHT_COLOR, LABELS, NUM_CLASSES, PERSON_CLASS, SegmentError,
};
use std::collections::HashSet;

#[test]
fn test_deeplab_palette_layout() {
    let palette = ClassPalette::deeplab().unwrap();
    assert_eq!(palette.len(), NUM_CLASSES);
    assert_eq!(palette.color(0), Some(Argb::TRANSPARENT));
    assert_eq!(palette.color(PERSON_CLASS), Some(HIGHLIGHT_COLOR));
    assert!(HIGHLIGHT_COLOR.is_opaque());
    assert_eq!(palette.label(PERSON_CLASS), Some("person"));
    assert_eq!(palette.label(20), Some("tv"));
    assert_eq!(palette.color(NUM_CLASSES), None);
}

#[test]
fn test_deeplab_palette_other_classes_semi_transparent_and_distinct() {
    let palette = ClassPalette::deeplab().unwrap();
    let mut seen = HashSet::new();
    for class in 1..NUM_CLASSES {
        let color = palette.color(class).unwrap();
        assert!(seen.insert(color), "class {class} reuses a color");
        if class != PERSON_CLASS {
            assert_eq!(color.alpha(), 200);
        }
    }
}

#[test]
fn test_generated_matches_deeplab_colors() {
    let generated = ClassPalette::generated(NUM_CLASSES, PERSON_CLASS).unwrap();
    let deeplab = ClassPalette::deeplab().unwrap();
    for class in 0..NUM_CLASSES {
        assert_eq!(generated.color(class), deeplab.color(class));
    }
    assert_eq!(generated.label(0), None);
}

#[test]
fn test_generated_rejects_highlight_out_of_range() {
    assert!(matches!(
        ClassPalette::generated(3, 3),
        Err(SegmentError::InvalidHighlightClass { .. })
    ));
}

#[test]
fn test_new_rejects_empty_and_oversized() {
    assert!(matches!(
        ClassPalette::new(Vec::new()),
        Err(SegmentError::InvalidPalette(_))
    ));
    assert!(ClassPalette::new(vec![Argb::TRANSPARENT; 257]).is_err());
    assert!(ClassPalette::new(vec![Argb::TRANSPARENT; 256]).is_ok());
}

#[test]
fn test_with_labels_length_checked() {
    let palette = ClassPalette::generated(NUM_CLASSES, PERSON_CLASS).unwrap();
    let labelled = palette.clone().with_labels(LABELS).unwrap();
    assert_eq!(labelled.label(1), Some("aeroplane"));
    assert!(palette.with_labels(["background"]).is_err());
}
