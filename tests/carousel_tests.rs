use approx::assert_relative_eq;
use story_arcs::api::{
    CardTransform, CarouselState, FilmCard, GenrePill, Theme, WheelOutcome, WheelPolicy,
    catalog_cards,
};
use story_arcs::core::Viewport;
use story_arcs::dataset::{Film, Genre};

#[test]
fn active_card_is_enlarged_and_opaque() {
    let active = CardTransform::for_offset(0);
    assert_relative_eq!(active.scale, 1.05);
    assert_relative_eq!(active.opacity, 1.0);
    assert_relative_eq!(active.translate_x, 0.0);
    assert_relative_eq!(active.translate_z, 0.0);
    assert_relative_eq!(active.rotate_x_deg, 10.0);
    assert_relative_eq!(active.rotate_y_deg, -15.0);
}

#[test]
fn cards_ahead_recede_and_fade_with_a_floor() {
    let second = CardTransform::for_offset(2);
    assert_relative_eq!(second.translate_x, 80.0);
    assert_relative_eq!(second.translate_z, -800.0);
    assert_relative_eq!(second.opacity, 0.7, epsilon = 1e-12);
    assert_relative_eq!(second.scale, 1.0);

    assert_relative_eq!(CardTransform::for_offset(6).opacity, 0.2);
    assert_relative_eq!(CardTransform::for_offset(8).opacity, 0.2);
    assert_relative_eq!(CardTransform::for_offset(9).opacity, 0.0);
}

#[test]
fn passed_cards_fly_past_the_viewer() {
    let passed = CardTransform::for_offset(-1);
    assert_relative_eq!(passed.translate_x, -40.0);
    assert_relative_eq!(passed.translate_y, -200.0);
    assert_relative_eq!(passed.translate_z, 1200.0);
    assert_relative_eq!(passed.opacity, 0.0);

    let further = CardTransform::for_offset(-3);
    assert!(further.translate_z > passed.translate_z);
}

#[test]
fn css_strings_match_browser_syntax() {
    assert_eq!(
        CardTransform::for_offset(1).css_transform(),
        "translate3d(40px, 0px, -400px) rotateX(10deg) rotateY(-15deg) rotateZ(0deg) scale(1)"
    );
    assert_eq!(
        CardTransform::css_transition(),
        "transform 0.8s cubic-bezier(0.2, 0.8, 0.2, 1), opacity 0.6s ease"
    );
}

#[test]
fn wheel_ignores_small_deltas_and_debounces() {
    let mut carousel = CarouselState::for_catalog();
    assert_eq!(carousel.on_wheel(3.0, 0.0), WheelOutcome::Ignored);
    assert_eq!(carousel.on_wheel(5.0, 0.0), WheelOutcome::Ignored);
    assert_eq!(carousel.on_wheel(f64::NAN, 0.0), WheelOutcome::Ignored);
    assert_eq!(carousel.active_index(), 0);

    assert_eq!(
        carousel.on_wheel(12.0, 0.0),
        WheelOutcome::Stepped { from: 0, to: 1 }
    );
    assert_eq!(carousel.on_wheel(40.0, 30.0), WheelOutcome::Ignored);
    assert_eq!(
        carousel.on_wheel(40.0, 60.0),
        WheelOutcome::Stepped { from: 1, to: 2 }
    );
    assert_eq!(
        carousel.on_wheel(-40.0, 200.0),
        WheelOutcome::Stepped { from: 2, to: 1 }
    );
}

#[test]
fn ignored_small_delta_does_not_restart_debounce() {
    let mut carousel = CarouselState::for_catalog();
    carousel.on_wheel(10.0, 0.0);
    assert_eq!(carousel.on_wheel(2.0, 60.0), WheelOutcome::Ignored);
    assert_eq!(
        carousel.on_wheel(10.0, 80.0),
        WheelOutcome::Stepped { from: 1, to: 2 }
    );
}

#[test]
fn wheel_clamps_at_both_ends() {
    let mut carousel = CarouselState::with_policy(
        3,
        WheelPolicy {
            debounce_ms: 0.0,
            min_delta: 0.0,
        },
    );
    assert_eq!(carousel.on_wheel(-1.0, 0.0), WheelOutcome::Clamped);
    carousel.on_wheel(1.0, 1.0);
    carousel.on_wheel(1.0, 2.0);
    assert_eq!(carousel.active_index(), 2);
    assert_eq!(carousel.on_wheel(1.0, 3.0), WheelOutcome::Clamped);
    assert_eq!(carousel.active_index(), 2);
}

#[test]
fn select_clamps_and_reports_changes() {
    let mut carousel = CarouselState::for_catalog();
    assert!(carousel.select(99));
    assert_eq!(carousel.active_index(), 11);
    assert_eq!(carousel.active_film(), Some(Film::Oppenheimer));
    assert!(!carousel.select(11));
    assert!(!carousel.next());

    assert!(carousel.select_film(Film::Inception));
    assert_eq!(carousel.active_index(), Film::Inception.index());
    assert_eq!(carousel.offset_of(0), -(Film::Inception.index() as isize));

    let mut empty = CarouselState::new(0);
    assert!(empty.is_empty());
    assert!(!empty.select(3));
    assert!(!empty.prev());
}

#[test]
fn only_active_and_two_following_cards_render_charts() {
    let mut carousel = CarouselState::for_catalog();
    carousel.select(3);
    let rendering: Vec<usize> = (0..carousel.len())
        .filter(|&index| carousel.renders_chart(index))
        .collect();
    assert_eq!(rendering, [3, 4, 5]);
}

#[test]
fn placements_paint_back_to_front_with_one_interactive_card() {
    let mut carousel = CarouselState::for_catalog();
    carousel.select(4);
    let placements = carousel.placements(0.0);
    assert_eq!(placements.len(), 12);
    assert_eq!(placements.first().map(|p| p.index), Some(11));
    assert_eq!(placements.last().map(|p| p.index), Some(0));
    assert!(placements.windows(2).all(|pair| pair[0].z_index < pair[1].z_index));

    let interactive: Vec<usize> = placements
        .iter()
        .filter(|p| p.interactive)
        .map(|p| p.index)
        .collect();
    assert_eq!(interactive, [4]);
    let active = placements.iter().find(|p| p.index == 4).expect("active");
    assert_eq!(active.offset, 0);
    assert!(active.renders_chart);
}

#[test]
fn step_animates_cards_to_their_new_slots() {
    let mut carousel = CarouselState::for_catalog();
    assert!(!carousel.is_animating(0.0));

    carousel.next();
    assert!(carousel.is_animating(1_000.0));
    let start = carousel.placements(1_000.0);
    let card = start.iter().find(|p| p.index == 1).expect("card");
    assert_relative_eq!(card.transform.translate_z, -400.0);

    let end = carousel.placements(1_800.0);
    let card = end.iter().find(|p| p.index == 1).expect("card");
    assert_relative_eq!(card.transform.scale, 1.05, epsilon = 1e-9);
    assert_relative_eq!(card.transform.translate_z, 0.0, epsilon = 1e-9);
    let passed = end.iter().find(|p| p.index == 0).expect("card");
    assert_relative_eq!(passed.transform.opacity, 0.0, epsilon = 1e-9);
    assert!(!carousel.is_animating(1_800.0));
}

#[test]
fn retarget_mid_flight_starts_from_current_position() {
    let mut carousel = CarouselState::for_catalog();
    carousel.next();
    carousel.placements(0.0);
    let mid = carousel.placements(300.0);
    let before = mid.iter().find(|p| p.index == 0).expect("card").transform;
    assert!(before.translate_z > 0.0 && before.translate_z < 1200.0);

    carousel.prev();
    let resumed = carousel.placements(300.0);
    let after = resumed.iter().find(|p| p.index == 0).expect("card").transform;
    assert_relative_eq!(after.translate_z, before.translate_z, epsilon = 1e-9);
    assert_relative_eq!(after.opacity, before.opacity, epsilon = 1e-9);
}

#[test]
fn genre_pills_tint_fill_and_border() {
    let pill = GenrePill::new(Genre::Drama);
    assert_eq!(pill.label, "Drama");
    assert_eq!(pill.color, Genre::Drama.color());
    assert_relative_eq!(pill.fill.alpha, 21.0 / 255.0);
    assert_relative_eq!(pill.border.alpha, 80.0 / 255.0);

    let known = GenrePill::from_label(" sci-fi ");
    assert_eq!(known.color, Genre::SciFi.color());
    let unknown = GenrePill::from_label("Mockumentary");
    assert_eq!(unknown.label, "Mockumentary");
    assert_eq!(unknown.color.to_hex(), "#64748b");
}

#[test]
fn film_card_header_reflects_metadata() {
    let card = FilmCard::new(Film::Inception);
    assert_eq!(card.caption, "MOVIE ARC");
    assert_eq!(card.title, "Inception");
    assert_eq!(card.year, 2010);
    assert_eq!(card.accent, Film::Inception.color());
    assert_eq!(card.header_labels(), ("839M".to_owned(), "8.8".to_owned()));
    let genres: Vec<&str> = card.genres.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(genres, ["Action", "Adventure", "Sci-Fi", "Thriller"]);

    assert_eq!(FilmCard::new(Film::TheDarkKnight).header_labels().0, "1.01B");
    assert_eq!(FilmCard::new(Film::Following).header_labels().0, "48k");
}

#[test]
fn conic_background_has_one_slice_per_palette_genre() {
    let card = FilmCard::new(Film::Inception);
    let sectors = card.conic_sectors();
    assert_eq!(sectors.len(), 22);
    assert_relative_eq!(sectors[0].start_deg, 0.0);
    assert_relative_eq!(sectors[21].end_deg, 360.0);
    for pair in sectors.windows(2) {
        assert_relative_eq!(pair[0].end_deg, pair[1].start_deg);
    }
    let colored: Vec<Genre> = sectors
        .iter()
        .filter(|sector| sector.color.is_some())
        .map(|sector| sector.genre)
        .collect();
    assert_eq!(
        colored,
        [Genre::Action, Genre::Adventure, Genre::SciFi, Genre::Thriller]
    );

    let css = card.conic_gradient_css();
    assert!(css.starts_with("conic-gradient(from 0deg, #ef4444 0deg "));
    assert!(css.contains("transparent"));
    assert!(css.ends_with("360deg)"));
}

#[test]
fn legend_blends_genre_colors_diagonally() {
    let card = FilmCard::new(Film::Memento);
    assert_eq!(card.legend_css(), "linear-gradient(135deg, #6366f1, #0ea5e9)");
}

#[test]
fn thumbnail_chart_is_light_static_and_transparent() {
    let card = FilmCard::new(Film::Tenet);
    let config = card.chart_config(Viewport::new(700, 360));
    assert_eq!(config.theme, Theme::Light);
    assert!(!config.animate);
    assert!(!config.paint_background);
    assert_eq!(config.viewport, Viewport::new(700, 360));
}

#[test]
fn catalog_cards_follow_release_order() {
    let cards = catalog_cards();
    assert_eq!(cards.len(), 12);
    assert!(cards.windows(2).all(|pair| pair[0].year <= pair[1].year));
    assert_eq!(cards[0].film, Film::Following);
}
