//! Integration tests: CSV input through grid estimation to mesh outlines.

use std::io::Write;

use tempfile::NamedTempFile;
use warpview::data::FieldReader;
use warpview::mesh::cell_outlines;
use warpview::WarpviewError;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn csv_to_mesh_pipeline() {
    let file = write_csv(
        "x,y,dx,dy\n\
         # a comment line\n\
         0, 0, 0.1, 0\n\
         1, 0, 0.1, 0\n\
         2, 0, 0.1, 0\n\
         0, 1, 0.1, 0\n\
         1, 1, 0.1, 0\n\
         2, 1, 0.1, 0\n",
    );

    let field = FieldReader::read_file(file.path()).unwrap();
    assert_eq!(field.len(), 6);

    let layout = field.grid_layout(0.001).unwrap();
    assert_eq!(layout.shape(), (2, 3));
    assert_eq!(layout.x.step, 1.0);

    let grids = field.to_grids(2.0, 0.001).unwrap();
    assert_eq!(grids.x.dim(), (2, 3));
    assert_eq!(grids.x_displaced[[0, 0]], 0.2);
    assert_eq!(grids.y_displaced[[1, 2]], 1.0);

    let path = cell_outlines(&grids.x_displaced, &grids.y_displaced).unwrap();
    // 5 points per cell, 1x2 cells.
    assert_eq!(path.len(), 10);
    assert_eq!(path.vertices[0], path.vertices[4]);
}

#[test]
fn header_only_csv_is_an_empty_field() {
    let file = write_csv("x,y,dx,dy\n");
    assert!(matches!(
        FieldReader::read_file(file.path()),
        Err(WarpviewError::EmptyField)
    ));
}

#[test]
fn malformed_rows_are_a_csv_error() {
    let file = write_csv("x,y,dx,dy\n1,2,three,4\n");
    assert!(matches!(
        FieldReader::read_file(file.path()),
        Err(WarpviewError::Csv(_))
    ));
}

#[test]
fn missing_file_is_a_file_open_error() {
    let missing = std::path::Path::new("/no/such/dir/field.csv");
    assert!(matches!(
        FieldReader::read_file(missing),
        Err(WarpviewError::FileOpen { .. })
    ));
}
