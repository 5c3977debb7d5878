use crate::core::DataPoint;

/// Canonical 24-beat reference shape every film is compared against.
pub static BASELINE_ARC: [DataPoint; 24] = [
    DataPoint::new_static(1, 1.0, "Opening image"),
    DataPoint::new_static(2, 2.0, "Setup"),
    DataPoint::new_static(3, 1.0, "Theme stated"),
    DataPoint::new_static(4, -3.0, "Inciting incident"),
    DataPoint::new_static(5, -5.0, "Debate"),
    DataPoint::new_static(6, 0.0, "Break into Act II"),
    DataPoint::new_static(7, 2.0, "B story"),
    DataPoint::new_static(8, -2.0, "Fun and games begins"),
    DataPoint::new_static(9, -4.0, "Rising complications"),
    DataPoint::new_static(10, -6.0, "Mid-crisis setup"),
    DataPoint::new_static(11, -3.0, "Hope spot"),
    DataPoint::new_static(12, 0.0, "Midpoint (reversal)"),
    DataPoint::new_static(13, 1.0, "Escalation"),
    DataPoint::new_static(14, -1.0, "Tension mounts"),
    DataPoint::new_static(15, -3.0, "Bad guys close in"),
    DataPoint::new_static(16, -8.0, "All is lost"),
    DataPoint::new_static(17, -6.0, "Dark night of the soul"),
    DataPoint::new_static(18, -2.0, "Break into Act III"),
    DataPoint::new_static(19, 3.0, "Final approach"),
    DataPoint::new_static(20, 6.0, "Climax"),
    DataPoint::new_static(21, 8.0, "Payoff"),
    DataPoint::new_static(22, 6.0, "Falling action"),
    DataPoint::new_static(23, 4.0, "Denouement"),
    DataPoint::new_static(24, 7.0, "Final image"),
];
