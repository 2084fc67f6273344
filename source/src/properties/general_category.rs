use super::PropertiesError;

/// основная категория символа (General Category, GC)
/// берется из UCD: вторая колонка UnicodeData.txt
/// всего 31 вариант, что укладывается в 5 бит
/// варианты отсортированы таким образом, чтобы было проще применять побитовые операции для получения общей категории
///
/// общие категории:
///     LC (Lu, Ll, Lt) - буквы, имеющие регистр
///     L (Lu, Ll, Lt, Lm, Lo) - буквы
///     M (Mn, Mc, Me) - комбинирующие символы
///     N (Nd, Nl, No) - цифры, числовые символы
///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
///     S (Sm, Sc, Sk, So) - различные символы (математические, валюты и т.д.)
///     Z (Zs, Zl, Zp) - разделители
///     C (Cc, Cf, Cs, Co, Cn) - системные символы
///
#[derive(Debug, PartialEq, Clone, Copy)]
#[repr(u8)]
pub enum GeneralCategory
{
    /// Cn - место под символ зарезервировано или не назначено, или же элемент не является символом.
    /// дефолтный вариант при отсутствии записи о символе в UCD
    Unassigned = 0, // 0b_0000_0000

    /// Lu - прописная буква
    UppercaseLetter = 1, // 0b_0000_0001
    /// Ll - строчная буква
    LowercaseLetter = 2, // 0b_0000_0010
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter = 3, // 0b_0000_0011

    /// Lm - буква-модификатор
    ModifierLetter = 4, // 0b_0000_0100
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter = 5, // 0b_0000_0101

    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    NonspacingMark = 6, // 0b_0000_0110
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark = 7, // 0b_0000_0111
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark = 8, // 0b_0000_1000

    /// Nd - десятичная цифра
    DecimalNumber = 9, // 0b_0000_1001
    /// Nl - буквоподобный числовой символ
    LetterNumber = 10, // 0b_0000_1010
    /// No - прочие числовые символы
    OtherNumber = 11, // 0b_0000_1011

    /// Zs - разделитель-пробел
    SpaceSeparator = 12, // 0b_0000_1100
    /// Zl - разделитель строки
    LineSeparator = 13, // 0b_0000_1101
    /// Zp - разделитель параграфов
    ParagraphSeparator = 14, // 0b_0000_1110

    /// Cc - управляющий символ, относится к C0 или C1
    Control = 16, // 0b_0001_0000
    /// Cf - управляющий символ форматирования
    Format = 17, // 0b_0001_0001
    /// Cs - символ-суррогат
    Surrogate = 18, // 0b_0001_0010
    /// Co - символ для приватного использования
    PrivateUse = 19, // 0b_0001_0011

    /// Pc - объединяющяя пунктуация, например _
    ConnectorPunctuation = 20, // 0b_0001_0100
    /// Pd - тире или дефис как знак препинания
    DashPunctuation = 21, // 0b_0001_0101
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation = 22, // 0b_0001_0110
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation = 23, // 0b_0001_0111
    /// Pi - начальный знак цитаты
    InitialPunctuation = 24, // 0b_0001_1000
    /// Pf - конечный знак цитаты
    FinalPunctuation = 25, // 0b_0001_1001
    /// Po - знак препинания другого типа
    OtherPunctuation = 26, // 0b_0001_1010

    /// Sm - математический символ
    MathSymbol = 28, // 0b_0001_1100
    /// Sc - символ валюты
    CurrencySymbol = 29, // 0b_0001_1101
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol = 30, // 0b_0001_1110
    /// So - прочие символы
    OtherSymbol = 31, // 0b_0001_1111
}

impl GeneralCategory
{
    /// двухбуквенное обозначение категории
    pub fn abbr(&self) -> &'static str
    {
        match self {
            Self::Unassigned => "Cn",
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::NonspacingMark => "Mn",
            Self::SpacingMark => "Mc",
            Self::EnclosingMark => "Me",
            Self::DecimalNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::Surrogate => "Cs",
            Self::PrivateUse => "Co",
            Self::ConnectorPunctuation => "Pc",
            Self::DashPunctuation => "Pd",
            Self::OpenPunctuation => "Ps",
            Self::ClosePunctuation => "Pe",
            Self::InitialPunctuation => "Pi",
            Self::FinalPunctuation => "Pf",
            Self::OtherPunctuation => "Po",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
        }
    }

    /// человекочитаемое название категории
    pub fn description(&self) -> &'static str
    {
        match self {
            Self::Unassigned => "Other, Not Assigned",
            Self::UppercaseLetter => "Letter, Uppercase",
            Self::LowercaseLetter => "Letter, Lowercase",
            Self::TitlecaseLetter => "Letter, Titlecase",
            Self::ModifierLetter => "Letter, Modifier",
            Self::OtherLetter => "Letter, Other",
            Self::NonspacingMark => "Mark, Nonspacing",
            Self::SpacingMark => "Mark, Spacing Combining",
            Self::EnclosingMark => "Mark, Enclosing",
            Self::DecimalNumber => "Number, Decimal Digit",
            Self::LetterNumber => "Number, Letter",
            Self::OtherNumber => "Number, Other",
            Self::SpaceSeparator => "Separator, Space",
            Self::LineSeparator => "Separator, Line",
            Self::ParagraphSeparator => "Separator, Paragraph",
            Self::Control => "Other, Control",
            Self::Format => "Other, Format",
            Self::Surrogate => "Other, Surrogate",
            Self::PrivateUse => "Other, Private Use",
            Self::ConnectorPunctuation => "Punctuation, Connector",
            Self::DashPunctuation => "Punctuation, Dash",
            Self::OpenPunctuation => "Punctuation, Open",
            Self::ClosePunctuation => "Punctuation, Close",
            Self::InitialPunctuation => "Punctuation, Initial quote (may behave like Ps or Pe depending on usage)",
            Self::FinalPunctuation => "Punctuation, Final quote (may behave like Ps or Pe depending on usage)",
            Self::OtherPunctuation => "Punctuation, Other",
            Self::MathSymbol => "Symbol, Math",
            Self::CurrencySymbol => "Symbol, Currency",
            Self::ModifierSymbol => "Symbol, Modifier",
            Self::OtherSymbol => "Symbol, Other",
        }
    }
}

impl TryFrom<&str> for GeneralCategory
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "Cn" | "" => Self::Unassigned,
            "Lu" => Self::UppercaseLetter,
            "Ll" => Self::LowercaseLetter,
            "Lt" => Self::TitlecaseLetter,
            "Lm" => Self::ModifierLetter,
            "Lo" => Self::OtherLetter,
            "Mn" => Self::NonspacingMark,
            "Mc" => Self::SpacingMark,
            "Me" => Self::EnclosingMark,
            "Nd" => Self::DecimalNumber,
            "Nl" => Self::LetterNumber,
            "No" => Self::OtherNumber,
            "Zs" => Self::SpaceSeparator,
            "Zl" => Self::LineSeparator,
            "Zp" => Self::ParagraphSeparator,
            "Cc" => Self::Control,
            "Cf" => Self::Format,
            "Cs" => Self::Surrogate,
            "Co" => Self::PrivateUse,
            "Pc" => Self::ConnectorPunctuation,
            "Pd" => Self::DashPunctuation,
            "Ps" => Self::OpenPunctuation,
            "Pe" => Self::ClosePunctuation,
            "Pi" => Self::InitialPunctuation,
            "Pf" => Self::FinalPunctuation,
            "Po" => Self::OtherPunctuation,
            "Sm" => Self::MathSymbol,
            "Sc" => Self::CurrencySymbol,
            "Sk" => Self::ModifierSymbol,
            "So" => Self::OtherSymbol,
            _ => return Err(PropertiesError::UnknownPropertyValue),
        })
    }
}

impl From<GeneralCategory> for u8
{
    #[inline]
    fn from(value: GeneralCategory) -> Self
    {
        value as u8
    }
}

impl core::fmt::Display for GeneralCategory
{
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{}", self.abbr())
    }
}
