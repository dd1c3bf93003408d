use crate::error::{Result, YijingError};
use serde::Serialize;

/// Display names of a hexagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HexagramInfo {
    /// King Wen number (1-64)
    pub number: u8,
    /// Unicode hexagram glyph
    pub symbol: char,
    pub chinese: &'static str,
    pub roman: &'static str,
    pub english: &'static str,
}

const fn info(
    number: u8,
    symbol: char,
    chinese: &'static str,
    roman: &'static str,
    english: &'static str,
) -> HexagramInfo {
    HexagramInfo {
        number,
        symbol,
        chinese,
        roman,
        english,
    }
}

/// The 64 hexagrams in King Wen order; entry `n - 1` describes hexagram `n`
pub const HEXAGRAMS: [HexagramInfo; 64] = [
    info(1, '䷀', "乾", "qián", "The Creative"),
    info(2, '䷁', "坤", "kūn", "The Receptive"),
    info(3, '䷂', "屯", "zhūn", "Difficulty at the Beginning"),
    info(4, '䷃', "蒙", "méng", "Youthful Folly"),
    info(5, '䷄', "需", "xū", "Waiting"),
    info(6, '䷅', "訟", "sòng", "Conflict"),
    info(7, '䷆', "師", "shī", "The Army"),
    info(8, '䷇', "比", "bǐ", "Holding Together"),
    info(9, '䷈', "小畜", "xiǎo chù", "Small Taming"),
    info(10, '䷉', "履", "lǚ", "Treading"),
    info(11, '䷊', "泰", "tài", "Peace"),
    info(12, '䷋', "否", "pǐ", "Standstill"),
    info(13, '䷌', "同人", "tóng rén", "Fellowship"),
    info(14, '䷍', "大有", "dà yǒu", "Great Possession"),
    info(15, '䷎', "謙", "qiān", "Modesty"),
    info(16, '䷏', "豫", "yù", "Enthusiasm"),
    info(17, '䷐', "隨", "suí", "Following"),
    info(18, '䷑', "蠱", "gǔ", "Work on the Decayed"),
    info(19, '䷒', "臨", "lín", "Approach"),
    info(20, '䷓', "觀", "guān", "Contemplation"),
    info(21, '䷔', "噬嗑", "shì kè", "Biting Through"),
    info(22, '䷕', "賁", "bì", "Grace"),
    info(23, '䷖', "剝", "bō", "Splitting Apart"),
    info(24, '䷗', "復", "fù", "Return"),
    info(25, '䷘', "無妄", "wú wàng", "Innocence"),
    info(26, '䷙', "大畜", "dà chù", "Great Taming"),
    info(27, '䷚', "頤", "yí", "Nourishment"),
    info(28, '䷛', "大過", "dà guò", "Great Preponderance"),
    info(29, '䷜', "坎", "kǎn", "The Abysmal Water"),
    info(30, '䷝', "離", "lí", "The Clinging Fire"),
    info(31, '䷞', "咸", "xián", "Influence"),
    info(32, '䷟', "恆", "héng", "Duration"),
    info(33, '䷠', "遯", "dùn", "Retreat"),
    info(34, '䷡', "大壯", "dà zhuàng", "Great Power"),
    info(35, '䷢', "晉", "jìn", "Progress"),
    info(36, '䷣', "明夷", "míng yí", "Darkening of the Light"),
    info(37, '䷤', "家人", "jiā rén", "The Family"),
    info(38, '䷥', "睽", "kuí", "Opposition"),
    info(39, '䷦', "蹇", "jiǎn", "Obstruction"),
    info(40, '䷧', "解", "xiè", "Deliverance"),
    info(41, '䷨', "損", "sǔn", "Decrease"),
    info(42, '䷩', "益", "yì", "Increase"),
    info(43, '䷪', "夬", "guài", "Breakthrough"),
    info(44, '䷫', "姤", "gòu", "Coming to Meet"),
    info(45, '䷬', "萃", "cuì", "Gathering Together"),
    info(46, '䷭', "升", "shēng", "Pushing Upward"),
    info(47, '䷮', "困", "kùn", "Oppression"),
    info(48, '䷯', "井", "jǐng", "The Well"),
    info(49, '䷰', "革", "gé", "Revolution"),
    info(50, '䷱', "鼎", "dǐng", "The Cauldron"),
    info(51, '䷲', "震", "zhèn", "The Arousing Thunder"),
    info(52, '䷳', "艮", "gèn", "Keeping Still Mountain"),
    info(53, '䷴', "漸", "jiàn", "Development"),
    info(54, '䷵', "歸妹", "guī mèi", "The Marrying Maiden"),
    info(55, '䷶', "豐", "fēng", "Abundance"),
    info(56, '䷷', "旅", "lǚ", "The Wanderer"),
    info(57, '䷸', "巽", "xùn", "The Gentle Wind"),
    info(58, '䷹', "兌", "duì", "The Joyous Lake"),
    info(59, '䷺', "渙", "huàn", "Dispersion"),
    info(60, '䷻', "節", "jié", "Limitation"),
    info(61, '䷼', "中孚", "zhōng fú", "Inner Truth"),
    info(62, '䷽', "小過", "xiǎo guò", "Small Preponderance"),
    info(63, '䷾', "既濟", "jì jì", "After Completion"),
    info(64, '䷿', "未濟", "wèi jì", "Before Completion"),
];

/// Look up the display names of a hexagram by King Wen number
pub fn hexagram_info(number: u8) -> Result<&'static HexagramInfo> {
    match number {
        1..=64 => Ok(&HEXAGRAMS[number as usize - 1]),
        other => Err(YijingError::InvalidHexagram(other)),
    }
}
