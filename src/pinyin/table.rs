//! Table-backed pinyin transliteration.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::{JiucuoError, Result};
use crate::lexicon::Word;
use crate::pinyin::syllable::{PhoneticKey, Syllable};
use crate::pinyin::Transliterator;

/// How tones appear in produced phonetic keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToneStyle {
    /// Tones are removed; `qī` and `qì` compare equal.
    #[default]
    Stripped,
    /// Tones are kept; `qī` and `qì` compare different.
    Marked,
}

/// Built-in readings for common characters, tone-marked.
///
/// Enough for tests and demos; real deployments load a full table with
/// [`PinyinTable::load_from_file`]. One reading per character; heteronyms
/// carry their most common reading.
const BUILTIN_ENTRIES: &[(char, &str)] = &[
    ('机', "jī"),
    ('器', "qì"),
    ('七', "qī"),
    ('学', "xué"),
    ('习', "xí"),
    ('几', "jǐ"),
    ('乎', "hū"),
    ('分', "fēn"),
    ('支', "zhī"),
    ('知', "zhī"),
    ('人', "rén"),
    ('工', "gōng"),
    ('智', "zhì"),
    ('能', "néng"),
    ('领', "lǐng"),
    ('域', "yù"),
    ('遇', "yù"),
    ('最', "zuì"),
    ('体', "tǐ"),
    ('现', "xiàn"),
    ('的', "de"),
    ('一', "yī"),
    ('个', "gè"),
    ('是', "shì"),
    ('中', "zhōng"),
    ('文', "wén"),
    ('本', "běn"),
    ('纠', "jiū"),
    ('错', "cuò"),
    ('词', "cí"),
    ('语', "yǔ"),
    ('句', "jù"),
    ('子', "zǐ"),
    ('我', "wǒ"),
    ('你', "nǐ"),
    ('他', "tā"),
    ('好', "hǎo"),
    ('不', "bù"),
    ('了', "le"),
    ('在', "zài"),
    ('有', "yǒu"),
    ('这', "zhè"),
    ('那', "nà"),
    ('上', "shàng"),
    ('下', "xià"),
    ('大', "dà"),
    ('小', "xiǎo"),
    ('天', "tiān"),
    ('地', "dì"),
    ('会', "huì"),
    ('说', "shuō"),
    ('来', "lái"),
    ('去', "qù"),
    ('要', "yào"),
    ('和', "hé"),
    ('对', "duì"),
    ('生', "shēng"),
    ('时', "shí"),
    ('候', "hòu"),
    ('发', "fā"),
    ('展', "zhǎn"),
    ('家', "jiā"),
    ('国', "guó"),
    ('年', "nián"),
    ('月', "yuè"),
    ('日', "rì"),
    ('行', "xíng"),
    ('动', "dòng"),
    ('作', "zuò"),
    ('用', "yòng"),
    ('电', "diàn"),
    ('脑', "nǎo"),
    ('计', "jì"),
    ('算', "suàn"),
    ('数', "shù"),
    ('据', "jù"),
    ('程', "chéng"),
    ('序', "xù"),
    ('软', "ruǎn"),
    ('件', "jiàn"),
    ('系', "xì"),
    ('统', "tǒng"),
    ('网', "wǎng"),
    ('络', "luò"),
    ('信', "xìn"),
    ('息', "xī"),
    ('技', "jì"),
    ('术', "shù"),
    ('科', "kē"),
    ('研', "yán"),
    ('究', "jiū"),
    ('理', "lǐ"),
    ('论', "lùn"),
    ('方', "fāng"),
    ('法', "fǎ"),
    ('模', "mó"),
    ('型', "xíng"),
    ('训', "xùn"),
    ('练', "liàn"),
    ('深', "shēn"),
    ('度', "dù"),
    ('神', "shén"),
    ('经', "jīng"),
    ('自', "zì"),
    ('然', "rán"),
    ('处', "chǔ"),
    ('识', "shí"),
    ('别', "bié"),
    ('见', "jiàn"),
    ('问', "wèn"),
    ('题', "tí"),
    ('答', "dá"),
    ('案', "àn"),
    ('字', "zì"),
    ('表', "biǎo"),
    ('查', "chá"),
    ('询', "xún"),
    ('百', "bǎi"),
    ('万', "wàn"),
    ('千', "qiān"),
];

lazy_static! {
    static ref BUILTIN_TABLE: AHashMap<char, Syllable> = BUILTIN_ENTRIES
        .iter()
        .map(|&(ch, marked)| (ch, Syllable::parse(marked)))
        .collect();
}

/// A character-to-syllable table implementing [`Transliterator`].
///
/// Lookups are total: characters without an entry (punctuation, digits,
/// foreign letters) pass through as a toneless syllable spelling the
/// character itself, so keys stay comparable across mixed text.
#[derive(Debug, Clone)]
pub struct PinyinTable {
    table: AHashMap<char, Syllable>,
    tone_style: ToneStyle,
}

impl PinyinTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        PinyinTable {
            table: AHashMap::new(),
            tone_style: ToneStyle::default(),
        }
    }

    /// Create a table with the built-in readings for common characters.
    pub fn builtin() -> Self {
        PinyinTable {
            table: BUILTIN_TABLE.clone(),
            tone_style: ToneStyle::default(),
        }
    }

    /// Build a table from `(character, tone-marked pinyin)` entries.
    pub fn from_entries(entries: &[(char, &str)]) -> Self {
        let mut table = PinyinTable::new();
        for &(ch, marked) in entries {
            table.insert(ch, marked);
        }
        table
    }

    /// Load a table file: one `character pinyin` pair per line, whitespace
    /// delimited, tone-marked pinyin. Lines that do not parse are skipped;
    /// for a character listed twice the last reading wins.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut table = PinyinTable::new();
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let mut parts = line.split_whitespace();

            let (Some(ch), Some(marked)) = (parts.next(), parts.next()) else {
                continue;
            };
            let mut chars = ch.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                continue;
            };
            table.insert(ch, marked);
        }

        if table.is_empty() {
            return Err(JiucuoError::lexicon(format!(
                "no usable entries in pinyin table {}",
                path.as_ref().display()
            )));
        }

        Ok(table)
    }

    /// Set the tone style for produced keys.
    pub fn with_tone_style(mut self, tone_style: ToneStyle) -> Self {
        self.tone_style = tone_style;
        self
    }

    /// Add or replace the reading for a character.
    pub fn insert(&mut self, ch: char, marked: &str) {
        self.table.insert(ch, Syllable::parse(marked));
    }

    /// Check whether the table carries a reading for a character.
    pub fn contains(&self, ch: char) -> bool {
        self.table.contains_key(&ch)
    }

    /// Number of characters with a reading.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for PinyinTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Transliterator for PinyinTable {
    fn transliterate(&self, word: &Word) -> Result<PhoneticKey> {
        let syllables = word
            .chars()
            .map(|ch| match self.table.get(&ch) {
                Some(syllable) => match self.tone_style {
                    ToneStyle::Stripped => syllable.stripped(),
                    ToneStyle::Marked => syllable.clone(),
                },
                // Pass-through for characters outside the table.
                None => Syllable::new(ch.to_string(), None),
            })
            .collect();

        Ok(PhoneticKey::new(syllables))
    }

    fn name(&self) -> &'static str {
        "pinyin_table"
    }
}
