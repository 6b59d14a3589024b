//! Reine Dreieckskonstruktionen über den aktuellen Eckpunkten.
//!
//! Alle Funktionen sind zustandslos und werden pro Frame neu ausgewertet.
//! Degenerierte Eingaben (kollineare oder zusammenfallende Ecken, senkrechte
//! Seiten) liefern NaN/Unendlich statt Fehlern; der Szenen-Builder verwirft
//! nicht zeichenbare Kreise.

use super::figure::Circle;
use glam::DVec2;

/// Seitenlängen eines Dreiecks; `a` liegt gegenüber von Ecke A, usw.
#[derive(Debug, Clone, Copy)]
pub struct SideLengths {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Euklidische Seitenlängen: a = |B−C|, b = |A−C|, c = |A−B|.
pub fn side_lengths([a_pt, b_pt, c_pt]: [DVec2; 3]) -> SideLengths {
    SideLengths {
        a: b_pt.distance(c_pt),
        b: a_pt.distance(c_pt),
        c: a_pt.distance(b_pt),
    }
}

/// Inkreismittelpunkt: mit den gegenüberliegenden Seitenlängen gewichtetes
/// Mittel der Ecken.
pub fn incenter(tri: [DVec2; 3]) -> DVec2 {
    let [a_pt, b_pt, c_pt] = tri;
    let s = side_lengths(tri);
    let perimeter = s.a + s.b + s.c;
    (s.a * a_pt + s.b * b_pt + s.c * c_pt) / perimeter
}

/// Inkreisradius über die Heron-Formel.
///
/// Kollineare Ecken ergeben Fläche ≈ 0 und damit Radius ≈ 0 — oder NaN,
/// wenn der Term unter der Wurzel durch Rundung knapp negativ wird. Beides
/// ist kein Fehlerfall.
pub fn inradius(tri: [DVec2; 3]) -> f64 {
    let s = side_lengths(tri);
    let semi = (s.a + s.b + s.c) / 2.0;
    let area = (semi * (semi - s.a) * (semi - s.b) * (semi - s.c)).sqrt();
    area / semi
}

/// Inkreis als fertiger Kreis.
pub fn incircle(tri: [DVec2; 3]) -> Circle {
    Circle {
        center: incenter(tri),
        radius: inradius(tri),
    }
}

/// Seitenmittelpunkte von (A,B), (B,C), (C,A).
pub fn midpoints([a, b, c]: [DVec2; 3]) -> [DVec2; 3] {
    [(a + b) / 2.0, (b + c) / 2.0, (c + a) / 2.0]
}

/// Orthozentrum über Seitenmittelpunkte und die Steigungen mAB/mBC.
///
/// Nicht der allgemeine Höhenschnittpunkt: die Konstruktion ist der Helfer
/// für den Neunpunktekreis und bestimmt dessen Lage. Degeneriert bei
/// mBC == mAB — parallele Seiten einschließlich senkrechter BC mit
/// unendlicher Steigung — zu NaN/Unendlich.
pub fn orthocenter([a, b, c]: [DVec2; 3]) -> DVec2 {
    let m_ab = (b.y - a.y) / (b.x - a.x);
    let m_bc = (c.y - b.y) / (c.x - b.x);

    let h_a = (b + c) / 2.0;
    let h_b = (a + c) / 2.0;

    DVec2::new(
        (m_ab * m_bc * (h_a.y - h_b.y) + m_bc * (h_a.x + h_b.x) - m_ab * (h_a.x + h_b.x))
            / (2.0 * (m_bc - m_ab)),
        (h_a.y + h_b.y) / 2.0,
    )
}

/// Umkreismittelpunkt über die Determinanten-Formel.
///
/// D = 0 bei kollinearen Ecken — das Ergebnis läuft als NaN/Unendlich
/// weiter und wird nicht maskiert.
pub fn circumcenter([a, b, c]: [DVec2; 3]) -> DVec2 {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    let a2 = a.length_squared();
    let b2 = b.length_squared();
    let c2 = c.length_squared();

    DVec2::new(
        (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
        (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
    )
}

/// Neunpunktekreis: Mittelpunkt = Mitte zwischen Umkreismittelpunkt und
/// Orthozentrum, Radius = Abstand zum ersten Seitenmittelpunkt.
pub fn nine_point_circle(tri: [DVec2; 3]) -> Circle {
    let center = (circumcenter(tri) + orthocenter(tri)) / 2.0;
    let radius = center.distance(midpoints(tri)[0]);
    Circle { center, radius }
}
