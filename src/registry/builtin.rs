//! Statically declared spatial functions.
//!
//! Each entry becomes one stub declaration. Raster functions document
//! themselves against the `RT_`-prefixed reference pages.

use crate::model::{Doc, FunctionDescriptor, TypeRef};

const BOOL: TypeRef = TypeRef::builtin("bool");
const FLOAT: TypeRef = TypeRef::builtin("float");
const INT: TypeRef = TypeRef::builtin("int");
const STR: TypeRef = TypeRef::builtin("str");

const GEOMETRY: TypeRef = TypeRef::new("geoalchemy2.types", "Geometry");
const GEOGRAPHY: TypeRef = TypeRef::new("geoalchemy2.types", "Geography");
const RASTER: TypeRef = TypeRef::new("geoalchemy2.types", "Raster");
const GEOMETRY_DUMP: TypeRef = TypeRef::new("geoalchemy2.types", "GeometryDump");
const SUMMARY_STATS: TypeRef = TypeRef::new("geoalchemy2.types", "SummaryStats");

/// Docstring of the hand-written `ST_AsGeoJSON` function class.
const AS_GEOJSON_DOC: &str = "Special process for the ST_AsGeoJSON() SQL function.

    Return the geometry as a GeoJSON \"geometry\" object, or the row as a GeoJSON \"feature\" object
    (PostGIS 3 only). (Cf GeoJSON specifications RFC 7946). 2D and 3D Geometries are both
    supported. GeoJSON only support SFS 1.1 geometry types (no curve support for example).
    See https://postgis.net/docs/ST_AsGeoJSON.html
    ";

/// `ST_AsGeoJSON` is implemented by hand rather than generated, so it is not
/// part of [`FUNCTIONS`]; its stub is always emitted first.
pub static BOOTSTRAP: FunctionDescriptor =
    FunctionDescriptor::new("ST_AsGeoJSON", Some(STR), Some(Doc::text(AS_GEOJSON_DOC)));

const fn f(name: &'static str, return_type: Option<TypeRef>, summary: &'static str) -> FunctionDescriptor {
    FunctionDescriptor::new(name, return_type, Some(Doc::text(summary)))
}

const fn rt(
    name: &'static str,
    return_type: Option<TypeRef>,
    summary: &'static str,
    reference_id: &'static str,
) -> FunctionDescriptor {
    FunctionDescriptor::new(name, return_type, Some(Doc::reference(summary, reference_id)))
}

pub static FUNCTIONS: &[FunctionDescriptor] = &[
    // Management
    f("AddGeometryColumn", None, "Adds a geometry column to an existing table."),
    f("DropGeometryColumn", None, "Removes a geometry column from a spatial table."),
    f("DropGeometryTable", None, "Drops a table and all its references in geometry_columns."),
    f("Find_SRID", None, "Returns the SRID defined for a geometry column."),
    f(
        "Populate_Geometry_Columns",
        None,
        "Ensures geometry columns are defined with type modifiers or have appropriate spatial constraints.",
    ),
    f(
        "UpdateGeometrySRID",
        None,
        "Updates the SRID of all features in a geometry column, and the table metadata.",
    ),
    // Constructors
    f(
        "ST_Collect",
        Some(GEOMETRY),
        "Creates a GeometryCollection or Multi* geometry from a set of geometries.",
    ),
    f("ST_LineFromMultiPoint", Some(GEOMETRY), "Creates a LineString from a MultiPoint geometry."),
    f(
        "ST_MakeEnvelope",
        Some(GEOMETRY),
        "Creates a rectangular Polygon from minimum and maximum coordinates.",
    ),
    f(
        "ST_MakeLine",
        Some(GEOMETRY),
        "Creates a Linestring from Point, MultiPoint, or LineString geometries.",
    ),
    f("ST_MakePoint", Some(GEOMETRY), "Creates a 2D, 3DZ or 4D Point."),
    f(
        "ST_MakePolygon",
        Some(GEOMETRY),
        "Creates a Polygon from a shell and optional list of holes.",
    ),
    f(
        "ST_Point",
        Some(GEOMETRY),
        "Creates a Point with the given coordinate values. Alias for ST_MakePoint.",
    ),
    // Accessors
    f("ST_Boundary", Some(GEOMETRY), "Returns the boundary of a geometry."),
    f("ST_CoordDim", Some(INT), "Return the coordinate dimension of a geometry."),
    f("ST_Dimension", Some(INT), "Returns the topological dimension of a geometry."),
    f(
        "ST_Dump",
        Some(GEOMETRY_DUMP),
        "Returns a set of geometry_dump rows for the components of a geometry.",
    ),
    f(
        "ST_Envelope",
        Some(GEOMETRY),
        "Returns a geometry representing the bounding box of a geometry.",
    ),
    f("ST_GeometryType", None, "Returns the SQL-MM type of a geometry as text."),
    f(
        "ST_IsClosed",
        Some(BOOL),
        "Tests if a LineStrings's start and end points are coincident. For a PolyhedralSurface tests if it \
         is closed (volumetric).",
    ),
    f("ST_IsEmpty", Some(BOOL), "Tests if a geometry is empty."),
    f("ST_NPoints", Some(INT), "Returns the number of points (vertices) in a geometry."),
    f(
        "ST_SRID",
        Some(INT),
        "Returns the spatial reference identifier for the ST_Geometry as defined in spatial_ref_sys table.",
    ),
    f("ST_X", Some(FLOAT), "Returns the X coordinate of a Point."),
    f("ST_Y", Some(FLOAT), "Returns the Y coordinate of a Point."),
    // Spatial reference
    f("ST_SetSRID", Some(GEOMETRY), "Set the SRID on a geometry to a particular integer value."),
    f(
        "ST_Transform",
        Some(GEOMETRY),
        "Return a new geometry with its coordinates transformed to a different spatial reference system.",
    ),
    // Input / output
    f(
        "ST_GeomFromText",
        Some(GEOMETRY),
        "Return a specified ST_Geometry value from Well-Known Text representation (WKT).",
    ),
    f(
        "ST_GeogFromText",
        Some(GEOGRAPHY),
        "Return a specified geography value from Well-Known Text representation or extended (WKT).",
    ),
    f(
        "ST_AsBinary",
        None,
        "Return the Well-Known Binary (WKB) representation of the geometry/geography without SRID meta data.",
    ),
    f(
        "ST_AsEWKT",
        Some(STR),
        "Return the Well-Known Text (WKT) representation of the geometry with SRID meta data.",
    ),
    f(
        "ST_AsText",
        Some(STR),
        "Return the Well-Known Text (WKT) representation of the geometry/geography without SRID metadata.",
    ),
    // Relationships
    f(
        "ST_Contains",
        Some(BOOL),
        "Returns true if and only if no points of B lie in the exterior of A, and at least one point of the \
         interior of B lies in the interior of A.",
    ),
    f(
        "ST_Intersects",
        Some(BOOL),
        "Returns TRUE if the Geometries/Geography \"spatially intersect in 2D\" - (share any portion of space) \
         and FALSE if they don't (they are Disjoint). For geography tolerance is 0.00001 meters (so any points \
         that close are considered to intersect)",
    ),
    f("ST_Within", Some(BOOL), "Returns true if the geometry A is completely inside geometry B"),
    f("ST_DWithin", Some(BOOL), "Returns true if the geometries are within a given distance"),
    // Measurement
    f("ST_Area", Some(FLOAT), "Returns the area of a polygonal geometry."),
    f(
        "ST_Distance",
        Some(FLOAT),
        "Returns the distance between two geometry or geography values.",
    ),
    f("ST_Length", Some(FLOAT), "Returns the 2D length of a linear geometry."),
    rt(
        "ST_3DDistance",
        Some(FLOAT),
        "Returns the 3D cartesian minimum distance (based on spatial ref) between two geometries in projected \
         units.",
        "ST_3DDistance",
    ),
    // Processing
    f(
        "ST_Buffer",
        Some(GEOMETRY),
        "Returns a geometry covering all points within a given distance from a geometry.",
    ),
    f("ST_Centroid", Some(GEOMETRY), "Returns the geometric center of a geometry."),
    f(
        "ST_Simplify",
        Some(GEOMETRY),
        "Returns a simplified version of a geometry, using the Douglas-Peucker algorithm.",
    ),
    f(
        "ST_Union",
        Some(GEOMETRY),
        "Returns a geometry representing the point-set union of the input geometries.",
    ),
    // Raster
    rt(
        "ST_AsRaster",
        Some(RASTER),
        "Converts a PostGIS geometry to a PostGIS raster.",
        "RT_ST_AsRaster",
    ),
    rt(
        "ST_Band",
        Some(RASTER),
        "Returns one or more bands of an existing raster as a new raster. Useful for building new rasters from \
         existing rasters.",
        "RT_ST_Band",
    ),
    rt(
        "ST_BandPixelType",
        None,
        "Returns the type of pixel for given band. If no band is specified, band 1 is assumed.",
        "RT_ST_BandPixelType",
    ),
    rt(
        "ST_Distinct4ma",
        None,
        "Raster processing function that calculates the number of unique pixel values in a neighborhood.",
        "RT_ST_Distinct4ma",
    ),
    rt("ST_Height", Some(INT), "Returns the height of the raster in pixels.", "RT_ST_Height"),
    rt(
        "ST_SummaryStatsAgg",
        Some(SUMMARY_STATS),
        "Aggregate. Returns summarystats consisting of count, sum, mean, stddev, min, max for a given raster \
         band of a set of raster. Band 1 is assumed is no band is specified.",
        "RT_ST_SummaryStatsAgg",
    ),
    rt(
        "ST_Value",
        None,
        "Returns the value of a given band in a given columnx, rowy pixel or at a particular geometric point. \
         Band numbers start at 1 and assumed to be 1 if not specified. If exclude_nodata_value is set to \
         false, then all pixels include nodata pixels are considered to intersect and return value. If \
         exclude_nodata_value is not passed in then reads it from metadata of raster.",
        "RT_ST_Value",
    ),
    rt("ST_Width", Some(INT), "Returns the width of the raster in pixels.", "RT_ST_Width"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for func in FUNCTIONS {
            assert!(seen.insert(&*func.name), "duplicate: {}", func.name);
        }
    }

    #[test]
    fn bootstrap_not_in_table() {
        assert!(FUNCTIONS.iter().all(|f| f.name != BOOTSTRAP.name));
    }

    #[test]
    fn every_entry_is_documented() {
        assert!(FUNCTIONS.iter().all(|f| f.doc.is_some()));
    }

    #[test]
    fn raster_entries_use_rt_pages() {
        let band = FUNCTIONS.iter().find(|f| f.name == "ST_Band").unwrap();
        let doc = band.doc.as_ref().unwrap();
        assert_eq!(doc.reference_id(&band.name), "RT_ST_Band");
    }
}
