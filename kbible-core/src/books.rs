//! Static registry of the 66 canonical books.
//!
//! The table is read-only and constructed at compile time. `index` is the
//! canonical identity (1..=66, unique); `key` is the machine key sent to the
//! verse source and is NOT unique in the source data: Zephaniah (36) and
//! Zechariah (38) both carry "zep". 2 Peter (61) lists 베드로전서 as its
//! first Korean name, a typo inherited from the source data; first-match
//! lookup therefore sends that alias to 1 Peter.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookEntry {
    /// Canonical book number, 1..=66. Unique.
    pub index: u8,
    /// English canonical name.
    pub name: &'static str,
    /// Machine key used in lookup keys. Not unique (see module docs).
    pub key: &'static str,
    /// Korean aliases; the first one is the primary alias used in labels.
    pub korean_names: &'static [&'static str],
    /// Short Latin aliases. Carried in the data but not consulted by
    /// `lookup`; citation matching is Korean-only by design.
    pub short_names: &'static [&'static str],
}

pub static BOOKS: [BookEntry; 66] = [
    BookEntry { index: 1, name: "Genesis", key: "ge", korean_names: &["창세기", "창"], short_names: &["Ge", "Gen"] },
    BookEntry { index: 2, name: "Exodus", key: "exo", korean_names: &["출애굽기", "출"], short_names: &["Ex", "Exo"] },
    BookEntry { index: 3, name: "Leviticus", key: "lev", korean_names: &["레위기", "레"], short_names: &["Le", "Lev"] },
    BookEntry { index: 4, name: "Numbers", key: "num", korean_names: &["민수기", "민"], short_names: &["Nu", "Num"] },
    BookEntry { index: 5, name: "Deuteronomy", key: "deu", korean_names: &["신명기", "신"], short_names: &["Dt", "Deut", "Deu", "De"] },
    BookEntry { index: 6, name: "Joshua", key: "josh", korean_names: &["여호수아", "수"], short_names: &["Js", "Jos", "Josh"] },
    BookEntry { index: 7, name: "Judges", key: "jdgs", korean_names: &["사사기", "삿"], short_names: &["Jg", "Jud", "Jdg", "Ju", "Jdgs", "Judg"] },
    BookEntry { index: 8, name: "Ruth", key: "ruth", korean_names: &["룻기", "룻"], short_names: &["Ru", "Rut"] },
    BookEntry { index: 9, name: "1 Samuel", key: "1sm", korean_names: &["사무엘상", "삼상"], short_names: &["1 Sa", "1 Sam"] },
    BookEntry { index: 10, name: "2 Samuel", key: "2sm", korean_names: &["사무엘하", "삼하"], short_names: &["2 Sa", "2 Sam"] },
    BookEntry { index: 11, name: "1 Kings", key: "1ki", korean_names: &["열왕기상", "왕상"], short_names: &["1 Ki", "1 King", "1 Kin", "1 Kngs"] },
    BookEntry { index: 12, name: "2 Kings", key: "2ki", korean_names: &["열왕기하", "왕하"], short_names: &["2 Ki", "2 King", "2 Kin", "2 Kngs"] },
    BookEntry { index: 13, name: "1 Chronicles", key: "1chr", korean_names: &["역대상", "대상"], short_names: &["1 Ch", "1 Chr", "1 Chron"] },
    BookEntry { index: 14, name: "2 Chronicles", key: "2chr", korean_names: &["역대하", "대하"], short_names: &["2 Ch", "2 Chr", "2 Chron"] },
    BookEntry { index: 15, name: "Ezra", key: "ezra", korean_names: &["에스라", "스"], short_names: &["Ez", "Ezr"] },
    BookEntry { index: 16, name: "Nehemiah", key: "neh", korean_names: &["느헤미야", "느"], short_names: &["Ne", "Neh"] },
    BookEntry { index: 17, name: "Esther", key: "est", korean_names: &["에스더", "에"], short_names: &["Es", "Est", "Esth", "Ester"] },
    BookEntry { index: 18, name: "Job", key: "job", korean_names: &["욥기", "욥"], short_names: &["Jb"] },
    BookEntry { index: 19, name: "Psalms", key: "psa", korean_names: &["시편", "시"], short_names: &["Ps", "Psa", "Pss", "Psalms"] },
    BookEntry { index: 20, name: "Proverbs", key: "prv", korean_names: &["잠언", "잠"], short_names: &["Pr", "Prov", "Pro"] },
    BookEntry { index: 21, name: "Ecclesiastes", key: "eccl", korean_names: &["전도서", "전"], short_names: &["Ec", "Ecc"] },
    BookEntry { index: 22, name: "Song of Solomon", key: "ssol", korean_names: &["아가", "아"], short_names: &["SOS", "Song of Songs", "SongOfSongs"] },
    BookEntry { index: 23, name: "Isaiah", key: "isa", korean_names: &["이사야", "사"], short_names: &["Isa"] },
    BookEntry { index: 24, name: "Jeremiah", key: "jer", korean_names: &["예레미야", "렘"], short_names: &["Je", "Jer"] },
    BookEntry { index: 25, name: "Lamentations", key: "lam", korean_names: &["예래미야애가", "애가", "애"], short_names: &["La", "Lam", "Lament"] },
    BookEntry { index: 26, name: "Ezekiel", key: "eze", korean_names: &["에스겔", "겔"], short_names: &["Ek", "Ezek", "Eze"] },
    BookEntry { index: 27, name: "Daniel", key: "dan", korean_names: &["다니엘", "단"], short_names: &["Da", "Dan", "Dl", "Dnl"] },
    BookEntry { index: 28, name: "Hosea", key: "hos", korean_names: &["호세아", "호"], short_names: &["Ho", "Hos"] },
    BookEntry { index: 29, name: "Joel", key: "joel", korean_names: &["요엘", "욜"], short_names: &["Jl", "Joe"] },
    BookEntry { index: 30, name: "Amos", key: "amos", korean_names: &["아모스", "암"], short_names: &["Am", "Amo"] },
    BookEntry { index: 31, name: "Obadiah", key: "obad", korean_names: &["오바댜", "옵"], short_names: &["Ob", "Oba", "Obd", "Odbh"] },
    BookEntry { index: 32, name: "Jonah", key: "jonah", korean_names: &["요나", "욘"], short_names: &["Jh", "Jon", "Jnh"] },
    BookEntry { index: 33, name: "Micah", key: "mic", korean_names: &["미가", "미"], short_names: &["Mi", "Mic"] },
    BookEntry { index: 34, name: "Nahum", key: "nahum", korean_names: &["나훔", "나"], short_names: &["Na", "Nah"] },
    BookEntry { index: 35, name: "Habakkuk", key: "hab", korean_names: &["하박국", "합"], short_names: &["Hb", "Hab", "Hk", "Habk"] },
    BookEntry { index: 36, name: "Zephaniah", key: "zep", korean_names: &["스바냐", "습"], short_names: &["Zp", "Zep", "Zeph", "Ze"] },
    BookEntry { index: 37, name: "Haggai", key: "hag", korean_names: &["학개", "학"], short_names: &["Ha", "Hag", "Hagg"] },
    // Shares key "zep" with Zephaniah; inherited from the source data.
    BookEntry { index: 38, name: "Zechariah", key: "zep", korean_names: &["스가랴", "슥"], short_names: &["Zc", "Zech", "Zec"] },
    BookEntry { index: 39, name: "Malachi", key: "mal", korean_names: &["말라기", "말"], short_names: &["Ml", "Mal", "Mlc"] },
    BookEntry { index: 40, name: "Matthew", key: "mat", korean_names: &["마태복음", "마"], short_names: &["Mt", "Matt", "Mat"] },
    BookEntry { index: 41, name: "Mark", key: "mark", korean_names: &["마가복음", "막"], short_names: &["Mk", "Mrk"] },
    BookEntry { index: 42, name: "Luke", key: "luke", korean_names: &["누가복음", "눅"], short_names: &["Lk", "Luk", "Lu"] },
    BookEntry { index: 43, name: "John", key: "john", korean_names: &["요한복음", "요"], short_names: &["Jn", "Joh", "Jo"] },
    BookEntry { index: 44, name: "Acts", key: "acts", korean_names: &["사도행전", "행"], short_names: &["Ac", "Act"] },
    BookEntry { index: 45, name: "Romans", key: "rom", korean_names: &["로마서", "롬"], short_names: &["Ro", "Rom", "Rmn", "Rmns"] },
    BookEntry { index: 46, name: "1 Corinthians", key: "1cor", korean_names: &["고린도전서", "고전"], short_names: &["1 Co", "1 Cor"] },
    BookEntry { index: 47, name: "2 Corinthians", key: "2cor", korean_names: &["고린도후서", "고후"], short_names: &["2 Co", "2 Cor"] },
    BookEntry { index: 48, name: "Galatians", key: "gal", korean_names: &["갈라디아서", "갈"], short_names: &["Ga", "Gal", "Gltns"] },
    BookEntry { index: 49, name: "Ephesians", key: "eph", korean_names: &["에베소서", "엡"], short_names: &["Ep", "Eph", "Ephn"] },
    BookEntry { index: 50, name: "Philippians", key: "phi", korean_names: &["빌립보서", "빌"], short_names: &["Phi", "Phil"] },
    BookEntry { index: 51, name: "Colossians", key: "col", korean_names: &["골로새서", "골"], short_names: &["Co", "Col", "Colo", "Cln", "Clns"] },
    BookEntry { index: 52, name: "1 Thessalonians", key: "1th", korean_names: &["데살로니가전서", "살전"], short_names: &["1 Th", "1 Thess", "1 Thes"] },
    BookEntry { index: 53, name: "2 Thessalonians", key: "2th", korean_names: &["데살로니가후서", "살후"], short_names: &["2 Th", "2 Thess", "2 Thes"] },
    BookEntry { index: 54, name: "1 Timothy", key: "1tim", korean_names: &["디모데전서", "딤전"], short_names: &["1 Ti", "1 Tim"] },
    BookEntry { index: 55, name: "2 Timothy", key: "2tim", korean_names: &["디모데후서", "딤후"], short_names: &["2 Ti", "2 Tim"] },
    BookEntry { index: 56, name: "Titus", key: "titus", korean_names: &["디도서", "딛"], short_names: &["Ti", "Tit", "Tt", "Ts"] },
    BookEntry { index: 57, name: "Philemon", key: "phmn", korean_names: &["빌레몬서", "빌레몬", "몬"], short_names: &["Pm", "Phile", "Philm"] },
    BookEntry { index: 58, name: "Hebrews", key: "heb", korean_names: &["히브리서", "히"], short_names: &["He", "Heb", "Hw"] },
    BookEntry { index: 59, name: "James", key: "jas", korean_names: &["야고보서", "약"], short_names: &["Jm", "Jam", "Jas", "Ja"] },
    BookEntry { index: 60, name: "1 Peter", key: "1pet", korean_names: &["베드로전서", "벧전"], short_names: &["1 Pe", "1 Pet", "1 P"] },
    // First Korean name is 베드로전서 in the source data (typo for 베드로후서);
    // first-match lookup resolves it to 1 Peter above.
    BookEntry { index: 61, name: "2 Peter", key: "2pet", korean_names: &["베드로전서", "벧후"], short_names: &["2 Pe", "2 Pet", "2 P"] },
    BookEntry { index: 62, name: "1 John", key: "1jn", korean_names: &["요한1서", "요한일서", "요1"], short_names: &["1 Joh", "1 Jo", "1 Jn", "1 J"] },
    BookEntry { index: 63, name: "2 John", key: "2jn", korean_names: &["요한2서", "요한이서", "요2"], short_names: &["2 Joh", "2 Jo", "2 Jn", "2 J"] },
    BookEntry { index: 64, name: "3 John", key: "3jn", korean_names: &["요한3서", "요3"], short_names: &["3 Joh", "3 Jo", "3 Jn", "3 J"] },
    BookEntry { index: 65, name: "Jude", key: "jude", korean_names: &["유다서", "유"], short_names: &[] },
    BookEntry { index: 66, name: "Revelation", key: "rev", korean_names: &["요한계시록", "계"], short_names: &["Re", "Rev", "Rvltn"] },
];

/// Exact-match lookup against Korean aliases only. The caller is expected to
/// have stripped whitespace already; no case folding or fuzzy matching.
pub fn lookup(alias: &str) -> Option<&'static BookEntry> {
    BOOKS.iter().find(|b| b.korean_names.contains(&alias))
}

pub fn by_index(index: u8) -> Option<&'static BookEntry> {
    BOOKS.iter().find(|b| b.index == index)
}
