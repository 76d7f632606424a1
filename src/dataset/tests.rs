use super::*;
use std::path::PathBuf;

const HEADER: &str = "movie_title,year,director_name,actor_name,country,genres\n";

fn load(rows: &str) -> Dataset {
    Dataset::from_reader(format!("{}{}", HEADER, rows).as_bytes()).unwrap()
}

#[test]
fn formats_single_genre() {
    assert_eq!(format_genres("Drama"), "drama");
}

#[test]
fn formats_two_genres() {
    assert_eq!(format_genres("Comedy|Drama"), "comedy and drama");
}

#[test]
fn formats_many_genres() {
    assert_eq!(
        format_genres("Action|Adventure|Fantasy|Sci-Fi"),
        "action, adventure, fantasy and sci-fi"
    );
}

#[test]
fn coerces_years() {
    assert_eq!(coerce_year("2009"), 2009);
    assert_eq!(coerce_year(" 2009.0 "), 2009);
    assert_eq!(coerce_year("+2009"), 2009);
    assert_eq!(coerce_year("1999.7"), 1999);
    assert_eq!(coerce_year("unknown"), 0);
    assert_eq!(coerce_year("-1950"), 0);
    assert_eq!(coerce_year("99999999999999"), 0);
}

#[test]
fn loads_complete_rows() {
    let dataset = load("Avatar,2009,James Cameron,CCH Pounder,USA,Action|Adventure|Fantasy\n");
    assert_eq!(
        dataset.records(),
        &[MovieRecord {
            title: "Avatar".to_owned(),
            year: 2009,
            director: "James Cameron".to_owned(),
            actor: "CCH Pounder".to_owned(),
            country: "USA".to_owned(),
            genres: "action, adventure and fantasy".to_owned(),
        }]
    );
}

#[test]
fn drops_incomplete_rows() {
    let dataset = load(
        "Avatar,2009,James Cameron,CCH Pounder,USA,Action\n\
         Spectre,2015,,Christoph Waltz,UK,Thriller\n\
         Tangled,2010,Nathan Greno,Brad Garrett,USA,   \n\
         Skyfall,,Sam Mendes,Daniel Craig,UK,Action\n",
    );
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].title, "Avatar");
}

#[test]
fn drops_short_rows() {
    let dataset = load(
        "Avatar,2009,James Cameron,CCH Pounder,USA,Action\n\
         Spectre,2015,Sam Mendes\n",
    );
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].title, "Avatar");
}

#[test]
fn keeps_rows_with_malformed_year() {
    let dataset = load("Avatar,circa 2009,James Cameron,CCH Pounder,USA,Action\n");
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].year, 0);
}

#[test]
fn trims_titles() {
    let dataset = load("Avatar\u{a0},2009,James Cameron,CCH Pounder,USA,Action\n");
    assert_eq!(dataset.records()[0].title, "Avatar");
}

#[test]
fn ignores_extra_columns() {
    let csv = "color,movie_title,year,director_name,actor_name,country,genres,budget\n\
               Color,Avatar,2009,James Cameron,CCH Pounder,USA,Action,237000000\n";
    let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
    assert_eq!(dataset.len(), 1);
}

#[test]
fn reports_missing_columns() {
    let csv = "movie_title,year,director_name\nAvatar,2009,James Cameron\n";
    let error = Dataset::from_reader(csv.as_bytes()).unwrap_err();
    match error.downcast_ref::<QuizError>() {
        Some(QuizError::MissingColumns(columns)) => {
            assert_eq!(columns, &["actor_name", "country", "genres"])
        }
        _ => panic!("Unexpected error: {:#}", error),
    }
}

#[test]
fn empty_file_is_missing_every_column() {
    let error = Dataset::from_reader("".as_bytes()).unwrap_err();
    match error.downcast_ref::<QuizError>() {
        Some(QuizError::MissingColumns(columns)) => assert_eq!(columns.len(), 6),
        _ => panic!("Unexpected error: {:#}", error),
    }
}

#[test]
fn fails_to_open_missing_file() {
    let path = PathBuf::from("this/file/does/not/exist.csv");
    assert!(Dataset::open(&path).is_err());
}

#[test]
fn opens_file_from_disk() {
    let mut path = std::env::temp_dir();
    path.push(format!("movie-quiz-dataset-{}.csv", std::process::id()));
    std::fs::write(
        &path,
        format!(
            "{}Avatar,2009,James Cameron,CCH Pounder,USA,Action|Adventure\n",
            HEADER
        ),
    )
    .unwrap();
    let dataset = Dataset::open(&path);
    std::fs::remove_file(&path).ok();
    assert_eq!(dataset.unwrap().len(), 1);
}

#[test]
fn cleaned_records_are_well_formed() {
    let dataset = load(
        "A,2001,d,a,USA,Action|Comedy|Drama|Romance\n\
         B,1987.0,d,a,USA,Horror\n\
         C,n/a,d,a,USA,Comedy|Family\n\
         D,-3,d,a,USA,Documentary|Music\n",
    );
    assert_eq!(dataset.len(), 4);
    for movie in dataset.records() {
        assert!(!movie.genres.contains('|'));
        if movie.title != "B" {
            assert_eq!(movie.genres.matches(" and ").count(), 1);
        }
        assert!(movie.year == 0 || movie.year > 1900);
    }
}

#[test]
fn detects_spreadsheets_by_extension() {
    assert!(is_spreadsheet(Path::new("movies.xlsx")));
    assert!(is_spreadsheet(Path::new("data/Movies.XLS")));
    assert!(!is_spreadsheet(Path::new("movies.csv")));
    assert!(!is_spreadsheet(Path::new("movies")));
}

#[test]
fn opens_spreadsheet_from_disk() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data/movies.xlsx");
    let dataset = Dataset::open(&path).unwrap();
    assert_eq!(
        dataset.records(),
        &[
            MovieRecord {
                title: "Avatar".to_owned(),
                year: 2009,
                director: "James Cameron".to_owned(),
                actor: "CCH Pounder".to_owned(),
                country: "USA".to_owned(),
                genres: "action, adventure and fantasy".to_owned(),
            },
            MovieRecord {
                title: "Skyfall".to_owned(),
                year: 2012,
                director: "Sam Mendes".to_owned(),
                actor: "Daniel Craig".to_owned(),
                country: "UK".to_owned(),
                genres: "action and thriller".to_owned(),
            },
        ]
    );
}

#[test]
fn fails_to_open_missing_spreadsheet() {
    let path = PathBuf::from("this/file/does/not/exist.xlsx");
    assert!(Dataset::open(&path).is_err());
}
