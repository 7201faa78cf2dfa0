// src/geo/geojson.rs
//
// Minimal GeoJSON FeatureCollection reader: one name and one geometry
// per feature, unprojected lon/lat. Only the kinds the world dataset
// uses (Point, Polygon, MultiPolygon); other geometry types are
// skipped, features without a usable name too.

use std::error::Error;

use serde_json::Value;

/// Rings are closed lon/lat loops; the first ring of a polygon is the
/// outer boundary, the rest are holes.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(f64, f64),
    Polygon(Vec<Vec<[f64; 2]>>),
    MultiPolygon(Vec<Vec<Vec<[f64; 2]>>>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub name: String,
    pub geometry: Geometry,
}

impl Geometry {
    /// All polygons of this geometry. Point seeds carry no area.
    pub fn into_polygons(self) -> Vec<Vec<Vec<[f64; 2]>>> {
        match self {
            Geometry::Point(..) => Vec::new(),
            Geometry::Polygon(rings) => vec![rings],
            Geometry::MultiPolygon(polys) => polys,
        }
    }

    /// Coverage union: the result covers the area of both inputs. Done
    /// by multipolygon concatenation, not polygon dissolve — the fill
    /// is identical for adjacent shapes.
    pub fn coverage_union(a: Geometry, b: Geometry) -> Geometry {
        let mut polys = a.into_polygons();
        polys.extend(b.into_polygons());
        Geometry::MultiPolygon(polys)
    }

    /// (min_lon, min_lat, max_lon, max_lat)
    pub fn bbox(&self) -> (f64, f64, f64, f64) {
        let mut bb = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
        let mut take = |lon: f64, lat: f64| {
            bb.0 = bb.0.min(lon);
            bb.1 = bb.1.min(lat);
            bb.2 = bb.2.max(lon);
            bb.3 = bb.3.max(lat);
        };
        match self {
            Geometry::Point(lon, lat) => take(*lon, *lat),
            Geometry::Polygon(rings) => {
                for ring in rings {
                    for p in ring {
                        take(p[0], p[1]);
                    }
                }
            }
            Geometry::MultiPolygon(polys) => {
                for rings in polys {
                    for ring in rings {
                        for p in ring {
                            take(p[0], p[1]);
                        }
                    }
                }
            }
        }
        bb
    }
}

pub fn parse_feature_collection(text: &str) -> Result<Vec<Shape>, Box<dyn Error>> {
    let root: Value = serde_json::from_str(text)?;
    if root["type"].as_str() != Some("FeatureCollection") {
        return Err("not a GeoJSON FeatureCollection".into());
    }
    let features = root["features"]
        .as_array()
        .ok_or("FeatureCollection has no features array")?;

    let mut out = Vec::with_capacity(features.len());
    for f in features {
        let Some(name) = feature_name(f) else { continue };
        let Some(geometry) = parse_geometry(&f["geometry"])? else { continue };
        out.push(Shape { name, geometry });
    }
    Ok(out)
}

/// Natural Earth exports carry the name under `name`, `NAME` or `ADMIN`
/// depending on vintage.
fn feature_name(feature: &Value) -> Option<String> {
    let props = &feature["properties"];
    for key in ["name", "NAME", "ADMIN"] {
        if let Some(n) = props[key].as_str() {
            if !n.is_empty() {
                return Some(n.to_string());
            }
        }
    }
    None
}

fn parse_geometry(geom: &Value) -> Result<Option<Geometry>, Box<dyn Error>> {
    let coords = &geom["coordinates"];
    match geom["type"].as_str() {
        Some("Point") => {
            let p = parse_position(coords)?;
            Ok(Some(Geometry::Point(p[0], p[1])))
        }
        Some("Polygon") => Ok(Some(Geometry::Polygon(parse_rings(coords)?))),
        Some("MultiPolygon") => {
            let polys = as_array(coords)?
                .iter()
                .map(parse_rings)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(Geometry::MultiPolygon(polys)))
        }
        _ => Ok(None),
    }
}

fn parse_rings(v: &Value) -> Result<Vec<Vec<[f64; 2]>>, Box<dyn Error>> {
    as_array(v)?
        .iter()
        .map(|ring| as_array(ring)?.iter().map(parse_position).collect())
        .collect()
}

fn parse_position(v: &Value) -> Result<[f64; 2], Box<dyn Error>> {
    let a = as_array(v)?;
    match (a.first().and_then(Value::as_f64), a.get(1).and_then(Value::as_f64)) {
        (Some(lon), Some(lat)) => Ok([lon, lat]),
        _ => Err(format!("bad coordinate pair: {v}").into()),
    }
}

fn as_array(v: &Value) -> Result<&Vec<Value>, Box<dyn Error>> {
    v.as_array()
        .ok_or_else(|| format!("expected array, got {v}").into())
}
