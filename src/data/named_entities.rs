// Named character reference data, generated from the WHATWG entity table
// (https://html.spec.whatwg.org/entities.json). Do not edit by hand.

/// Length in characters of the longest name in the table, including the
/// trailing semicolon where present.
pub const LONGEST_ENTITY_NAME: usize = 32;

/// Maps an entity name (semicolon included when part of the reference) to
/// the one or two scalar values it expands to. Single-scalar expansions pad
/// the second slot with NUL.
pub static NAMED_ENTITIES: phf::Map<&'static str, [char; 2]> = phf::phf_map! {
    "AElig" => ['\u{c6}', '\0'],
    "AElig;" => ['\u{c6}', '\0'],
    "AMP" => ['&', '\0'],
    "AMP;" => ['&', '\0'],
    "Aacute" => ['\u{c1}', '\0'],
    "Aacute;" => ['\u{c1}', '\0'],
    "Abreve;" => ['\u{102}', '\0'],
    "Acirc" => ['\u{c2}', '\0'],
    "Acirc;" => ['\u{c2}', '\0'],
    "Acy;" => ['\u{410}', '\0'],
    "Afr;" => ['\u{1d504}', '\0'],
    "Agrave" => ['\u{c0}', '\0'],
    "Agrave;" => ['\u{c0}', '\0'],
    "Alpha;" => ['\u{391}', '\0'],
    "Amacr;" => ['\u{100}', '\0'],
    "And;" => ['\u{2a53}', '\0'],
    "Aogon;" => ['\u{104}', '\0'],
    "Aopf;" => ['\u{1d538}', '\0'],
    "ApplyFunction;" => ['\u{2061}', '\0'],
    "Aring" => ['\u{c5}', '\0'],
    "Aring;" => ['\u{c5}', '\0'],
    "Ascr;" => ['\u{1d49c}', '\0'],
    "Assign;" => ['\u{2254}', '\0'],
    "Atilde" => ['\u{c3}', '\0'],
    "Atilde;" => ['\u{c3}', '\0'],
    "Auml" => ['\u{c4}', '\0'],
    "Auml;" => ['\u{c4}', '\0'],
    "Backslash;" => ['\u{2216}', '\0'],
    "Barv;" => ['\u{2ae7}', '\0'],
    "Barwed;" => ['\u{2306}', '\0'],
    "Bcy;" => ['\u{411}', '\0'],
    "Because;" => ['\u{2235}', '\0'],
    "Bernoullis;" => ['\u{212c}', '\0'],
    "Beta;" => ['\u{392}', '\0'],
    "Bfr;" => ['\u{1d505}', '\0'],
    "Bopf;" => ['\u{1d539}', '\0'],
    "Breve;" => ['\u{2d8}', '\0'],
    "Bscr;" => ['\u{212c}', '\0'],
    "Bumpeq;" => ['\u{224e}', '\0'],
    "CHcy;" => ['\u{427}', '\0'],
    "COPY" => ['\u{a9}', '\0'],
    "COPY;" => ['\u{a9}', '\0'],
    "Cacute;" => ['\u{106}', '\0'],
    "Cap;" => ['\u{22d2}', '\0'],
    "CapitalDifferentialD;" => ['\u{2145}', '\0'],
    "Cayleys;" => ['\u{212d}', '\0'],
    "Ccaron;" => ['\u{10c}', '\0'],
    "Ccedil" => ['\u{c7}', '\0'],
    "Ccedil;" => ['\u{c7}', '\0'],
    "Ccirc;" => ['\u{108}', '\0'],
    "Cconint;" => ['\u{2230}', '\0'],
    "Cdot;" => ['\u{10a}', '\0'],
    "Cedilla;" => ['\u{b8}', '\0'],
    "CenterDot;" => ['\u{b7}', '\0'],
    "Cfr;" => ['\u{212d}', '\0'],
    "Chi;" => ['\u{3a7}', '\0'],
    "CircleDot;" => ['\u{2299}', '\0'],
    "CircleMinus;" => ['\u{2296}', '\0'],
    "CirclePlus;" => ['\u{2295}', '\0'],
    "CircleTimes;" => ['\u{2297}', '\0'],
    "ClockwiseContourIntegral;" => ['\u{2232}', '\0'],
    "CloseCurlyDoubleQuote;" => ['\u{201d}', '\0'],
    "CloseCurlyQuote;" => ['\u{2019}', '\0'],
    "Colon;" => ['\u{2237}', '\0'],
    "Colone;" => ['\u{2a74}', '\0'],
    "Congruent;" => ['\u{2261}', '\0'],
    "Conint;" => ['\u{222f}', '\0'],
    "ContourIntegral;" => ['\u{222e}', '\0'],
    "Copf;" => ['\u{2102}', '\0'],
    "Coproduct;" => ['\u{2210}', '\0'],
    "CounterClockwiseContourIntegral;" => ['\u{2233}', '\0'],
    "Cross;" => ['\u{2a2f}', '\0'],
    "Cscr;" => ['\u{1d49e}', '\0'],
    "Cup;" => ['\u{22d3}', '\0'],
    "CupCap;" => ['\u{224d}', '\0'],
    "DD;" => ['\u{2145}', '\0'],
    "DDotrahd;" => ['\u{2911}', '\0'],
    "DJcy;" => ['\u{402}', '\0'],
    "DScy;" => ['\u{405}', '\0'],
    "DZcy;" => ['\u{40f}', '\0'],
    "Dagger;" => ['\u{2021}', '\0'],
    "Darr;" => ['\u{21a1}', '\0'],
    "Dashv;" => ['\u{2ae4}', '\0'],
    "Dcaron;" => ['\u{10e}', '\0'],
    "Dcy;" => ['\u{414}', '\0'],
    "Del;" => ['\u{2207}', '\0'],
    "Delta;" => ['\u{394}', '\0'],
    "Dfr;" => ['\u{1d507}', '\0'],
    "DiacriticalAcute;" => ['\u{b4}', '\0'],
    "DiacriticalDot;" => ['\u{2d9}', '\0'],
    "DiacriticalDoubleAcute;" => ['\u{2dd}', '\0'],
    "DiacriticalGrave;" => ['`', '\0'],
    "DiacriticalTilde;" => ['\u{2dc}', '\0'],
    "Diamond;" => ['\u{22c4}', '\0'],
    "DifferentialD;" => ['\u{2146}', '\0'],
    "Dopf;" => ['\u{1d53b}', '\0'],
    "Dot;" => ['\u{a8}', '\0'],
    "DotDot;" => ['\u{20dc}', '\0'],
    "DotEqual;" => ['\u{2250}', '\0'],
    "DoubleContourIntegral;" => ['\u{222f}', '\0'],
    "DoubleDot;" => ['\u{a8}', '\0'],
    "DoubleDownArrow;" => ['\u{21d3}', '\0'],
    "DoubleLeftArrow;" => ['\u{21d0}', '\0'],
    "DoubleLeftRightArrow;" => ['\u{21d4}', '\0'],
    "DoubleLeftTee;" => ['\u{2ae4}', '\0'],
    "DoubleLongLeftArrow;" => ['\u{27f8}', '\0'],
    "DoubleLongLeftRightArrow;" => ['\u{27fa}', '\0'],
    "DoubleLongRightArrow;" => ['\u{27f9}', '\0'],
    "DoubleRightArrow;" => ['\u{21d2}', '\0'],
    "DoubleRightTee;" => ['\u{22a8}', '\0'],
    "DoubleUpArrow;" => ['\u{21d1}', '\0'],
    "DoubleUpDownArrow;" => ['\u{21d5}', '\0'],
    "DoubleVerticalBar;" => ['\u{2225}', '\0'],
    "DownArrow;" => ['\u{2193}', '\0'],
    "DownArrowBar;" => ['\u{2913}', '\0'],
    "DownArrowUpArrow;" => ['\u{21f5}', '\0'],
    "DownBreve;" => ['\u{311}', '\0'],
    "DownLeftRightVector;" => ['\u{2950}', '\0'],
    "DownLeftTeeVector;" => ['\u{295e}', '\0'],
    "DownLeftVector;" => ['\u{21bd}', '\0'],
    "DownLeftVectorBar;" => ['\u{2956}', '\0'],
    "DownRightTeeVector;" => ['\u{295f}', '\0'],
    "DownRightVector;" => ['\u{21c1}', '\0'],
    "DownRightVectorBar;" => ['\u{2957}', '\0'],
    "DownTee;" => ['\u{22a4}', '\0'],
    "DownTeeArrow;" => ['\u{21a7}', '\0'],
    "Downarrow;" => ['\u{21d3}', '\0'],
    "Dscr;" => ['\u{1d49f}', '\0'],
    "Dstrok;" => ['\u{110}', '\0'],
    "ENG;" => ['\u{14a}', '\0'],
    "ETH" => ['\u{d0}', '\0'],
    "ETH;" => ['\u{d0}', '\0'],
    "Eacute" => ['\u{c9}', '\0'],
    "Eacute;" => ['\u{c9}', '\0'],
    "Ecaron;" => ['\u{11a}', '\0'],
    "Ecirc" => ['\u{ca}', '\0'],
    "Ecirc;" => ['\u{ca}', '\0'],
    "Ecy;" => ['\u{42d}', '\0'],
    "Edot;" => ['\u{116}', '\0'],
    "Efr;" => ['\u{1d508}', '\0'],
    "Egrave" => ['\u{c8}', '\0'],
    "Egrave;" => ['\u{c8}', '\0'],
    "Element;" => ['\u{2208}', '\0'],
    "Emacr;" => ['\u{112}', '\0'],
    "EmptySmallSquare;" => ['\u{25fb}', '\0'],
    "EmptyVerySmallSquare;" => ['\u{25ab}', '\0'],
    "Eogon;" => ['\u{118}', '\0'],
    "Eopf;" => ['\u{1d53c}', '\0'],
    "Epsilon;" => ['\u{395}', '\0'],
    "Equal;" => ['\u{2a75}', '\0'],
    "EqualTilde;" => ['\u{2242}', '\0'],
    "Equilibrium;" => ['\u{21cc}', '\0'],
    "Escr;" => ['\u{2130}', '\0'],
    "Esim;" => ['\u{2a73}', '\0'],
    "Eta;" => ['\u{397}', '\0'],
    "Euml" => ['\u{cb}', '\0'],
    "Euml;" => ['\u{cb}', '\0'],
    "Exists;" => ['\u{2203}', '\0'],
    "ExponentialE;" => ['\u{2147}', '\0'],
    "Fcy;" => ['\u{424}', '\0'],
    "Ffr;" => ['\u{1d509}', '\0'],
    "FilledSmallSquare;" => ['\u{25fc}', '\0'],
    "FilledVerySmallSquare;" => ['\u{25aa}', '\0'],
    "Fopf;" => ['\u{1d53d}', '\0'],
    "ForAll;" => ['\u{2200}', '\0'],
    "Fouriertrf;" => ['\u{2131}', '\0'],
    "Fscr;" => ['\u{2131}', '\0'],
    "GJcy;" => ['\u{403}', '\0'],
    "GT" => ['>', '\0'],
    "GT;" => ['>', '\0'],
    "Gamma;" => ['\u{393}', '\0'],
    "Gammad;" => ['\u{3dc}', '\0'],
    "Gbreve;" => ['\u{11e}', '\0'],
    "Gcedil;" => ['\u{122}', '\0'],
    "Gcirc;" => ['\u{11c}', '\0'],
    "Gcy;" => ['\u{413}', '\0'],
    "Gdot;" => ['\u{120}', '\0'],
    "Gfr;" => ['\u{1d50a}', '\0'],
    "Gg;" => ['\u{22d9}', '\0'],
    "Gopf;" => ['\u{1d53e}', '\0'],
    "GreaterEqual;" => ['\u{2265}', '\0'],
    "GreaterEqualLess;" => ['\u{22db}', '\0'],
    "GreaterFullEqual;" => ['\u{2267}', '\0'],
    "GreaterGreater;" => ['\u{2aa2}', '\0'],
    "GreaterLess;" => ['\u{2277}', '\0'],
    "GreaterSlantEqual;" => ['\u{2a7e}', '\0'],
    "GreaterTilde;" => ['\u{2273}', '\0'],
    "Gscr;" => ['\u{1d4a2}', '\0'],
    "Gt;" => ['\u{226b}', '\0'],
    "HARDcy;" => ['\u{42a}', '\0'],
    "Hacek;" => ['\u{2c7}', '\0'],
    "Hat;" => ['^', '\0'],
    "Hcirc;" => ['\u{124}', '\0'],
    "Hfr;" => ['\u{210c}', '\0'],
    "HilbertSpace;" => ['\u{210b}', '\0'],
    "Hopf;" => ['\u{210d}', '\0'],
    "HorizontalLine;" => ['\u{2500}', '\0'],
    "Hscr;" => ['\u{210b}', '\0'],
    "Hstrok;" => ['\u{126}', '\0'],
    "HumpDownHump;" => ['\u{224e}', '\0'],
    "HumpEqual;" => ['\u{224f}', '\0'],
    "IEcy;" => ['\u{415}', '\0'],
    "IJlig;" => ['\u{132}', '\0'],
    "IOcy;" => ['\u{401}', '\0'],
    "Iacute" => ['\u{cd}', '\0'],
    "Iacute;" => ['\u{cd}', '\0'],
    "Icirc" => ['\u{ce}', '\0'],
    "Icirc;" => ['\u{ce}', '\0'],
    "Icy;" => ['\u{418}', '\0'],
    "Idot;" => ['\u{130}', '\0'],
    "Ifr;" => ['\u{2111}', '\0'],
    "Igrave" => ['\u{cc}', '\0'],
    "Igrave;" => ['\u{cc}', '\0'],
    "Im;" => ['\u{2111}', '\0'],
    "Imacr;" => ['\u{12a}', '\0'],
    "ImaginaryI;" => ['\u{2148}', '\0'],
    "Implies;" => ['\u{21d2}', '\0'],
    "Int;" => ['\u{222c}', '\0'],
    "Integral;" => ['\u{222b}', '\0'],
    "Intersection;" => ['\u{22c2}', '\0'],
    "InvisibleComma;" => ['\u{2063}', '\0'],
    "InvisibleTimes;" => ['\u{2062}', '\0'],
    "Iogon;" => ['\u{12e}', '\0'],
    "Iopf;" => ['\u{1d540}', '\0'],
    "Iota;" => ['\u{399}', '\0'],
    "Iscr;" => ['\u{2110}', '\0'],
    "Itilde;" => ['\u{128}', '\0'],
    "Iukcy;" => ['\u{406}', '\0'],
    "Iuml" => ['\u{cf}', '\0'],
    "Iuml;" => ['\u{cf}', '\0'],
    "Jcirc;" => ['\u{134}', '\0'],
    "Jcy;" => ['\u{419}', '\0'],
    "Jfr;" => ['\u{1d50d}', '\0'],
    "Jopf;" => ['\u{1d541}', '\0'],
    "Jscr;" => ['\u{1d4a5}', '\0'],
    "Jsercy;" => ['\u{408}', '\0'],
    "Jukcy;" => ['\u{404}', '\0'],
    "KHcy;" => ['\u{425}', '\0'],
    "KJcy;" => ['\u{40c}', '\0'],
    "Kappa;" => ['\u{39a}', '\0'],
    "Kcedil;" => ['\u{136}', '\0'],
    "Kcy;" => ['\u{41a}', '\0'],
    "Kfr;" => ['\u{1d50e}', '\0'],
    "Kopf;" => ['\u{1d542}', '\0'],
    "Kscr;" => ['\u{1d4a6}', '\0'],
    "LJcy;" => ['\u{409}', '\0'],
    "LT" => ['<', '\0'],
    "LT;" => ['<', '\0'],
    "Lacute;" => ['\u{139}', '\0'],
    "Lambda;" => ['\u{39b}', '\0'],
    "Lang;" => ['\u{27ea}', '\0'],
    "Laplacetrf;" => ['\u{2112}', '\0'],
    "Larr;" => ['\u{219e}', '\0'],
    "Lcaron;" => ['\u{13d}', '\0'],
    "Lcedil;" => ['\u{13b}', '\0'],
    "Lcy;" => ['\u{41b}', '\0'],
    "LeftAngleBracket;" => ['\u{27e8}', '\0'],
    "LeftArrow;" => ['\u{2190}', '\0'],
    "LeftArrowBar;" => ['\u{21e4}', '\0'],
    "LeftArrowRightArrow;" => ['\u{21c6}', '\0'],
    "LeftCeiling;" => ['\u{2308}', '\0'],
    "LeftDoubleBracket;" => ['\u{27e6}', '\0'],
    "LeftDownTeeVector;" => ['\u{2961}', '\0'],
    "LeftDownVector;" => ['\u{21c3}', '\0'],
    "LeftDownVectorBar;" => ['\u{2959}', '\0'],
    "LeftFloor;" => ['\u{230a}', '\0'],
    "LeftRightArrow;" => ['\u{2194}', '\0'],
    "LeftRightVector;" => ['\u{294e}', '\0'],
    "LeftTee;" => ['\u{22a3}', '\0'],
    "LeftTeeArrow;" => ['\u{21a4}', '\0'],
    "LeftTeeVector;" => ['\u{295a}', '\0'],
    "LeftTriangle;" => ['\u{22b2}', '\0'],
    "LeftTriangleBar;" => ['\u{29cf}', '\0'],
    "LeftTriangleEqual;" => ['\u{22b4}', '\0'],
    "LeftUpDownVector;" => ['\u{2951}', '\0'],
    "LeftUpTeeVector;" => ['\u{2960}', '\0'],
    "LeftUpVector;" => ['\u{21bf}', '\0'],
    "LeftUpVectorBar;" => ['\u{2958}', '\0'],
    "LeftVector;" => ['\u{21bc}', '\0'],
    "LeftVectorBar;" => ['\u{2952}', '\0'],
    "Leftarrow;" => ['\u{21d0}', '\0'],
    "Leftrightarrow;" => ['\u{21d4}', '\0'],
    "LessEqualGreater;" => ['\u{22da}', '\0'],
    "LessFullEqual;" => ['\u{2266}', '\0'],
    "LessGreater;" => ['\u{2276}', '\0'],
    "LessLess;" => ['\u{2aa1}', '\0'],
    "LessSlantEqual;" => ['\u{2a7d}', '\0'],
    "LessTilde;" => ['\u{2272}', '\0'],
    "Lfr;" => ['\u{1d50f}', '\0'],
    "Ll;" => ['\u{22d8}', '\0'],
    "Lleftarrow;" => ['\u{21da}', '\0'],
    "Lmidot;" => ['\u{13f}', '\0'],
    "LongLeftArrow;" => ['\u{27f5}', '\0'],
    "LongLeftRightArrow;" => ['\u{27f7}', '\0'],
    "LongRightArrow;" => ['\u{27f6}', '\0'],
    "Longleftarrow;" => ['\u{27f8}', '\0'],
    "Longleftrightarrow;" => ['\u{27fa}', '\0'],
    "Longrightarrow;" => ['\u{27f9}', '\0'],
    "Lopf;" => ['\u{1d543}', '\0'],
    "LowerLeftArrow;" => ['\u{2199}', '\0'],
    "LowerRightArrow;" => ['\u{2198}', '\0'],
    "Lscr;" => ['\u{2112}', '\0'],
    "Lsh;" => ['\u{21b0}', '\0'],
    "Lstrok;" => ['\u{141}', '\0'],
    "Lt;" => ['\u{226a}', '\0'],
    "Map;" => ['\u{2905}', '\0'],
    "Mcy;" => ['\u{41c}', '\0'],
    "MediumSpace;" => ['\u{205f}', '\0'],
    "Mellintrf;" => ['\u{2133}', '\0'],
    "Mfr;" => ['\u{1d510}', '\0'],
    "MinusPlus;" => ['\u{2213}', '\0'],
    "Mopf;" => ['\u{1d544}', '\0'],
    "Mscr;" => ['\u{2133}', '\0'],
    "Mu;" => ['\u{39c}', '\0'],
    "NJcy;" => ['\u{40a}', '\0'],
    "Nacute;" => ['\u{143}', '\0'],
    "Ncaron;" => ['\u{147}', '\0'],
    "Ncedil;" => ['\u{145}', '\0'],
    "Ncy;" => ['\u{41d}', '\0'],
    "NegativeMediumSpace;" => ['\u{200b}', '\0'],
    "NegativeThickSpace;" => ['\u{200b}', '\0'],
    "NegativeThinSpace;" => ['\u{200b}', '\0'],
    "NegativeVeryThinSpace;" => ['\u{200b}', '\0'],
    "NestedGreaterGreater;" => ['\u{226b}', '\0'],
    "NestedLessLess;" => ['\u{226a}', '\0'],
    "NewLine;" => ['\u{a}', '\0'],
    "Nfr;" => ['\u{1d511}', '\0'],
    "NoBreak;" => ['\u{2060}', '\0'],
    "NonBreakingSpace;" => ['\u{a0}', '\0'],
    "Nopf;" => ['\u{2115}', '\0'],
    "Not;" => ['\u{2aec}', '\0'],
    "NotCongruent;" => ['\u{2262}', '\0'],
    "NotCupCap;" => ['\u{226d}', '\0'],
    "NotDoubleVerticalBar;" => ['\u{2226}', '\0'],
    "NotElement;" => ['\u{2209}', '\0'],
    "NotEqual;" => ['\u{2260}', '\0'],
    "NotEqualTilde;" => ['\u{2242}', '\u{338}'],
    "NotExists;" => ['\u{2204}', '\0'],
    "NotGreater;" => ['\u{226f}', '\0'],
    "NotGreaterEqual;" => ['\u{2271}', '\0'],
    "NotGreaterFullEqual;" => ['\u{2267}', '\u{338}'],
    "NotGreaterGreater;" => ['\u{226b}', '\u{338}'],
    "NotGreaterLess;" => ['\u{2279}', '\0'],
    "NotGreaterSlantEqual;" => ['\u{2a7e}', '\u{338}'],
    "NotGreaterTilde;" => ['\u{2275}', '\0'],
    "NotHumpDownHump;" => ['\u{224e}', '\u{338}'],
    "NotHumpEqual;" => ['\u{224f}', '\u{338}'],
    "NotLeftTriangle;" => ['\u{22ea}', '\0'],
    "NotLeftTriangleBar;" => ['\u{29cf}', '\u{338}'],
    "NotLeftTriangleEqual;" => ['\u{22ec}', '\0'],
    "NotLess;" => ['\u{226e}', '\0'],
    "NotLessEqual;" => ['\u{2270}', '\0'],
    "NotLessGreater;" => ['\u{2278}', '\0'],
    "NotLessLess;" => ['\u{226a}', '\u{338}'],
    "NotLessSlantEqual;" => ['\u{2a7d}', '\u{338}'],
    "NotLessTilde;" => ['\u{2274}', '\0'],
    "NotNestedGreaterGreater;" => ['\u{2aa2}', '\u{338}'],
    "NotNestedLessLess;" => ['\u{2aa1}', '\u{338}'],
    "NotPrecedes;" => ['\u{2280}', '\0'],
    "NotPrecedesEqual;" => ['\u{2aaf}', '\u{338}'],
    "NotPrecedesSlantEqual;" => ['\u{22e0}', '\0'],
    "NotReverseElement;" => ['\u{220c}', '\0'],
    "NotRightTriangle;" => ['\u{22eb}', '\0'],
    "NotRightTriangleBar;" => ['\u{29d0}', '\u{338}'],
    "NotRightTriangleEqual;" => ['\u{22ed}', '\0'],
    "NotSquareSubset;" => ['\u{228f}', '\u{338}'],
    "NotSquareSubsetEqual;" => ['\u{22e2}', '\0'],
    "NotSquareSuperset;" => ['\u{2290}', '\u{338}'],
    "NotSquareSupersetEqual;" => ['\u{22e3}', '\0'],
    "NotSubset;" => ['\u{2282}', '\u{20d2}'],
    "NotSubsetEqual;" => ['\u{2288}', '\0'],
    "NotSucceeds;" => ['\u{2281}', '\0'],
    "NotSucceedsEqual;" => ['\u{2ab0}', '\u{338}'],
    "NotSucceedsSlantEqual;" => ['\u{22e1}', '\0'],
    "NotSucceedsTilde;" => ['\u{227f}', '\u{338}'],
    "NotSuperset;" => ['\u{2283}', '\u{20d2}'],
    "NotSupersetEqual;" => ['\u{2289}', '\0'],
    "NotTilde;" => ['\u{2241}', '\0'],
    "NotTildeEqual;" => ['\u{2244}', '\0'],
    "NotTildeFullEqual;" => ['\u{2247}', '\0'],
    "NotTildeTilde;" => ['\u{2249}', '\0'],
    "NotVerticalBar;" => ['\u{2224}', '\0'],
    "Nscr;" => ['\u{1d4a9}', '\0'],
    "Ntilde" => ['\u{d1}', '\0'],
    "Ntilde;" => ['\u{d1}', '\0'],
    "Nu;" => ['\u{39d}', '\0'],
    "OElig;" => ['\u{152}', '\0'],
    "Oacute" => ['\u{d3}', '\0'],
    "Oacute;" => ['\u{d3}', '\0'],
    "Ocirc" => ['\u{d4}', '\0'],
    "Ocirc;" => ['\u{d4}', '\0'],
    "Ocy;" => ['\u{41e}', '\0'],
    "Odblac;" => ['\u{150}', '\0'],
    "Ofr;" => ['\u{1d512}', '\0'],
    "Ograve" => ['\u{d2}', '\0'],
    "Ograve;" => ['\u{d2}', '\0'],
    "Omacr;" => ['\u{14c}', '\0'],
    "Omega;" => ['\u{3a9}', '\0'],
    "Omicron;" => ['\u{39f}', '\0'],
    "Oopf;" => ['\u{1d546}', '\0'],
    "OpenCurlyDoubleQuote;" => ['\u{201c}', '\0'],
    "OpenCurlyQuote;" => ['\u{2018}', '\0'],
    "Or;" => ['\u{2a54}', '\0'],
    "Oscr;" => ['\u{1d4aa}', '\0'],
    "Oslash" => ['\u{d8}', '\0'],
    "Oslash;" => ['\u{d8}', '\0'],
    "Otilde" => ['\u{d5}', '\0'],
    "Otilde;" => ['\u{d5}', '\0'],
    "Otimes;" => ['\u{2a37}', '\0'],
    "Ouml" => ['\u{d6}', '\0'],
    "Ouml;" => ['\u{d6}', '\0'],
    "OverBar;" => ['\u{203e}', '\0'],
    "OverBrace;" => ['\u{23de}', '\0'],
    "OverBracket;" => ['\u{23b4}', '\0'],
    "OverParenthesis;" => ['\u{23dc}', '\0'],
    "PartialD;" => ['\u{2202}', '\0'],
    "Pcy;" => ['\u{41f}', '\0'],
    "Pfr;" => ['\u{1d513}', '\0'],
    "Phi;" => ['\u{3a6}', '\0'],
    "Pi;" => ['\u{3a0}', '\0'],
    "PlusMinus;" => ['\u{b1}', '\0'],
    "Poincareplane;" => ['\u{210c}', '\0'],
    "Popf;" => ['\u{2119}', '\0'],
    "Pr;" => ['\u{2abb}', '\0'],
    "Precedes;" => ['\u{227a}', '\0'],
    "PrecedesEqual;" => ['\u{2aaf}', '\0'],
    "PrecedesSlantEqual;" => ['\u{227c}', '\0'],
    "PrecedesTilde;" => ['\u{227e}', '\0'],
    "Prime;" => ['\u{2033}', '\0'],
    "Product;" => ['\u{220f}', '\0'],
    "Proportion;" => ['\u{2237}', '\0'],
    "Proportional;" => ['\u{221d}', '\0'],
    "Pscr;" => ['\u{1d4ab}', '\0'],
    "Psi;" => ['\u{3a8}', '\0'],
    "QUOT" => ['"', '\0'],
    "QUOT;" => ['"', '\0'],
    "Qfr;" => ['\u{1d514}', '\0'],
    "Qopf;" => ['\u{211a}', '\0'],
    "Qscr;" => ['\u{1d4ac}', '\0'],
    "RBarr;" => ['\u{2910}', '\0'],
    "REG" => ['\u{ae}', '\0'],
    "REG;" => ['\u{ae}', '\0'],
    "Racute;" => ['\u{154}', '\0'],
    "Rang;" => ['\u{27eb}', '\0'],
    "Rarr;" => ['\u{21a0}', '\0'],
    "Rarrtl;" => ['\u{2916}', '\0'],
    "Rcaron;" => ['\u{158}', '\0'],
    "Rcedil;" => ['\u{156}', '\0'],
    "Rcy;" => ['\u{420}', '\0'],
    "Re;" => ['\u{211c}', '\0'],
    "ReverseElement;" => ['\u{220b}', '\0'],
    "ReverseEquilibrium;" => ['\u{21cb}', '\0'],
    "ReverseUpEquilibrium;" => ['\u{296f}', '\0'],
    "Rfr;" => ['\u{211c}', '\0'],
    "Rho;" => ['\u{3a1}', '\0'],
    "RightAngleBracket;" => ['\u{27e9}', '\0'],
    "RightArrow;" => ['\u{2192}', '\0'],
    "RightArrowBar;" => ['\u{21e5}', '\0'],
    "RightArrowLeftArrow;" => ['\u{21c4}', '\0'],
    "RightCeiling;" => ['\u{2309}', '\0'],
    "RightDoubleBracket;" => ['\u{27e7}', '\0'],
    "RightDownTeeVector;" => ['\u{295d}', '\0'],
    "RightDownVector;" => ['\u{21c2}', '\0'],
    "RightDownVectorBar;" => ['\u{2955}', '\0'],
    "RightFloor;" => ['\u{230b}', '\0'],
    "RightTee;" => ['\u{22a2}', '\0'],
    "RightTeeArrow;" => ['\u{21a6}', '\0'],
    "RightTeeVector;" => ['\u{295b}', '\0'],
    "RightTriangle;" => ['\u{22b3}', '\0'],
    "RightTriangleBar;" => ['\u{29d0}', '\0'],
    "RightTriangleEqual;" => ['\u{22b5}', '\0'],
    "RightUpDownVector;" => ['\u{294f}', '\0'],
    "RightUpTeeVector;" => ['\u{295c}', '\0'],
    "RightUpVector;" => ['\u{21be}', '\0'],
    "RightUpVectorBar;" => ['\u{2954}', '\0'],
    "RightVector;" => ['\u{21c0}', '\0'],
    "RightVectorBar;" => ['\u{2953}', '\0'],
    "Rightarrow;" => ['\u{21d2}', '\0'],
    "Ropf;" => ['\u{211d}', '\0'],
    "RoundImplies;" => ['\u{2970}', '\0'],
    "Rrightarrow;" => ['\u{21db}', '\0'],
    "Rscr;" => ['\u{211b}', '\0'],
    "Rsh;" => ['\u{21b1}', '\0'],
    "RuleDelayed;" => ['\u{29f4}', '\0'],
    "SHCHcy;" => ['\u{429}', '\0'],
    "SHcy;" => ['\u{428}', '\0'],
    "SOFTcy;" => ['\u{42c}', '\0'],
    "Sacute;" => ['\u{15a}', '\0'],
    "Sc;" => ['\u{2abc}', '\0'],
    "Scaron;" => ['\u{160}', '\0'],
    "Scedil;" => ['\u{15e}', '\0'],
    "Scirc;" => ['\u{15c}', '\0'],
    "Scy;" => ['\u{421}', '\0'],
    "Sfr;" => ['\u{1d516}', '\0'],
    "ShortDownArrow;" => ['\u{2193}', '\0'],
    "ShortLeftArrow;" => ['\u{2190}', '\0'],
    "ShortRightArrow;" => ['\u{2192}', '\0'],
    "ShortUpArrow;" => ['\u{2191}', '\0'],
    "Sigma;" => ['\u{3a3}', '\0'],
    "SmallCircle;" => ['\u{2218}', '\0'],
    "Sopf;" => ['\u{1d54a}', '\0'],
    "Sqrt;" => ['\u{221a}', '\0'],
    "Square;" => ['\u{25a1}', '\0'],
    "SquareIntersection;" => ['\u{2293}', '\0'],
    "SquareSubset;" => ['\u{228f}', '\0'],
    "SquareSubsetEqual;" => ['\u{2291}', '\0'],
    "SquareSuperset;" => ['\u{2290}', '\0'],
    "SquareSupersetEqual;" => ['\u{2292}', '\0'],
    "SquareUnion;" => ['\u{2294}', '\0'],
    "Sscr;" => ['\u{1d4ae}', '\0'],
    "Star;" => ['\u{22c6}', '\0'],
    "Sub;" => ['\u{22d0}', '\0'],
    "Subset;" => ['\u{22d0}', '\0'],
    "SubsetEqual;" => ['\u{2286}', '\0'],
    "Succeeds;" => ['\u{227b}', '\0'],
    "SucceedsEqual;" => ['\u{2ab0}', '\0'],
    "SucceedsSlantEqual;" => ['\u{227d}', '\0'],
    "SucceedsTilde;" => ['\u{227f}', '\0'],
    "SuchThat;" => ['\u{220b}', '\0'],
    "Sum;" => ['\u{2211}', '\0'],
    "Sup;" => ['\u{22d1}', '\0'],
    "Superset;" => ['\u{2283}', '\0'],
    "SupersetEqual;" => ['\u{2287}', '\0'],
    "Supset;" => ['\u{22d1}', '\0'],
    "THORN" => ['\u{de}', '\0'],
    "THORN;" => ['\u{de}', '\0'],
    "TRADE;" => ['\u{2122}', '\0'],
    "TSHcy;" => ['\u{40b}', '\0'],
    "TScy;" => ['\u{426}', '\0'],
    "Tab;" => ['\u{9}', '\0'],
    "Tau;" => ['\u{3a4}', '\0'],
    "Tcaron;" => ['\u{164}', '\0'],
    "Tcedil;" => ['\u{162}', '\0'],
    "Tcy;" => ['\u{422}', '\0'],
    "Tfr;" => ['\u{1d517}', '\0'],
    "Therefore;" => ['\u{2234}', '\0'],
    "Theta;" => ['\u{398}', '\0'],
    "ThickSpace;" => ['\u{205f}', '\u{200a}'],
    "ThinSpace;" => ['\u{2009}', '\0'],
    "Tilde;" => ['\u{223c}', '\0'],
    "TildeEqual;" => ['\u{2243}', '\0'],
    "TildeFullEqual;" => ['\u{2245}', '\0'],
    "TildeTilde;" => ['\u{2248}', '\0'],
    "Topf;" => ['\u{1d54b}', '\0'],
    "TripleDot;" => ['\u{20db}', '\0'],
    "Tscr;" => ['\u{1d4af}', '\0'],
    "Tstrok;" => ['\u{166}', '\0'],
    "Uacute" => ['\u{da}', '\0'],
    "Uacute;" => ['\u{da}', '\0'],
    "Uarr;" => ['\u{219f}', '\0'],
    "Uarrocir;" => ['\u{2949}', '\0'],
    "Ubrcy;" => ['\u{40e}', '\0'],
    "Ubreve;" => ['\u{16c}', '\0'],
    "Ucirc" => ['\u{db}', '\0'],
    "Ucirc;" => ['\u{db}', '\0'],
    "Ucy;" => ['\u{423}', '\0'],
    "Udblac;" => ['\u{170}', '\0'],
    "Ufr;" => ['\u{1d518}', '\0'],
    "Ugrave" => ['\u{d9}', '\0'],
    "Ugrave;" => ['\u{d9}', '\0'],
    "Umacr;" => ['\u{16a}', '\0'],
    "UnderBar;" => ['_', '\0'],
    "UnderBrace;" => ['\u{23df}', '\0'],
    "UnderBracket;" => ['\u{23b5}', '\0'],
    "UnderParenthesis;" => ['\u{23dd}', '\0'],
    "Union;" => ['\u{22c3}', '\0'],
    "UnionPlus;" => ['\u{228e}', '\0'],
    "Uogon;" => ['\u{172}', '\0'],
    "Uopf;" => ['\u{1d54c}', '\0'],
    "UpArrow;" => ['\u{2191}', '\0'],
    "UpArrowBar;" => ['\u{2912}', '\0'],
    "UpArrowDownArrow;" => ['\u{21c5}', '\0'],
    "UpDownArrow;" => ['\u{2195}', '\0'],
    "UpEquilibrium;" => ['\u{296e}', '\0'],
    "UpTee;" => ['\u{22a5}', '\0'],
    "UpTeeArrow;" => ['\u{21a5}', '\0'],
    "Uparrow;" => ['\u{21d1}', '\0'],
    "Updownarrow;" => ['\u{21d5}', '\0'],
    "UpperLeftArrow;" => ['\u{2196}', '\0'],
    "UpperRightArrow;" => ['\u{2197}', '\0'],
    "Upsi;" => ['\u{3d2}', '\0'],
    "Upsilon;" => ['\u{3a5}', '\0'],
    "Uring;" => ['\u{16e}', '\0'],
    "Uscr;" => ['\u{1d4b0}', '\0'],
    "Utilde;" => ['\u{168}', '\0'],
    "Uuml" => ['\u{dc}', '\0'],
    "Uuml;" => ['\u{dc}', '\0'],
    "VDash;" => ['\u{22ab}', '\0'],
    "Vbar;" => ['\u{2aeb}', '\0'],
    "Vcy;" => ['\u{412}', '\0'],
    "Vdash;" => ['\u{22a9}', '\0'],
    "Vdashl;" => ['\u{2ae6}', '\0'],
    "Vee;" => ['\u{22c1}', '\0'],
    "Verbar;" => ['\u{2016}', '\0'],
    "Vert;" => ['\u{2016}', '\0'],
    "VerticalBar;" => ['\u{2223}', '\0'],
    "VerticalLine;" => ['|', '\0'],
    "VerticalSeparator;" => ['\u{2758}', '\0'],
    "VerticalTilde;" => ['\u{2240}', '\0'],
    "VeryThinSpace;" => ['\u{200a}', '\0'],
    "Vfr;" => ['\u{1d519}', '\0'],
    "Vopf;" => ['\u{1d54d}', '\0'],
    "Vscr;" => ['\u{1d4b1}', '\0'],
    "Vvdash;" => ['\u{22aa}', '\0'],
    "Wcirc;" => ['\u{174}', '\0'],
    "Wedge;" => ['\u{22c0}', '\0'],
    "Wfr;" => ['\u{1d51a}', '\0'],
    "Wopf;" => ['\u{1d54e}', '\0'],
    "Wscr;" => ['\u{1d4b2}', '\0'],
    "Xfr;" => ['\u{1d51b}', '\0'],
    "Xi;" => ['\u{39e}', '\0'],
    "Xopf;" => ['\u{1d54f}', '\0'],
    "Xscr;" => ['\u{1d4b3}', '\0'],
    "YAcy;" => ['\u{42f}', '\0'],
    "YIcy;" => ['\u{407}', '\0'],
    "YUcy;" => ['\u{42e}', '\0'],
    "Yacute" => ['\u{dd}', '\0'],
    "Yacute;" => ['\u{dd}', '\0'],
    "Ycirc;" => ['\u{176}', '\0'],
    "Ycy;" => ['\u{42b}', '\0'],
    "Yfr;" => ['\u{1d51c}', '\0'],
    "Yopf;" => ['\u{1d550}', '\0'],
    "Yscr;" => ['\u{1d4b4}', '\0'],
    "Yuml;" => ['\u{178}', '\0'],
    "ZHcy;" => ['\u{416}', '\0'],
    "Zacute;" => ['\u{179}', '\0'],
    "Zcaron;" => ['\u{17d}', '\0'],
    "Zcy;" => ['\u{417}', '\0'],
    "Zdot;" => ['\u{17b}', '\0'],
    "ZeroWidthSpace;" => ['\u{200b}', '\0'],
    "Zeta;" => ['\u{396}', '\0'],
    "Zfr;" => ['\u{2128}', '\0'],
    "Zopf;" => ['\u{2124}', '\0'],
    "Zscr;" => ['\u{1d4b5}', '\0'],
    "aacute" => ['\u{e1}', '\0'],
    "aacute;" => ['\u{e1}', '\0'],
    "abreve;" => ['\u{103}', '\0'],
    "ac;" => ['\u{223e}', '\0'],
    "acE;" => ['\u{223e}', '\u{333}'],
    "acd;" => ['\u{223f}', '\0'],
    "acirc" => ['\u{e2}', '\0'],
    "acirc;" => ['\u{e2}', '\0'],
    "acute" => ['\u{b4}', '\0'],
    "acute;" => ['\u{b4}', '\0'],
    "acy;" => ['\u{430}', '\0'],
    "aelig" => ['\u{e6}', '\0'],
    "aelig;" => ['\u{e6}', '\0'],
    "af;" => ['\u{2061}', '\0'],
    "afr;" => ['\u{1d51e}', '\0'],
    "agrave" => ['\u{e0}', '\0'],
    "agrave;" => ['\u{e0}', '\0'],
    "alefsym;" => ['\u{2135}', '\0'],
    "aleph;" => ['\u{2135}', '\0'],
    "alpha;" => ['\u{3b1}', '\0'],
    "amacr;" => ['\u{101}', '\0'],
    "amalg;" => ['\u{2a3f}', '\0'],
    "amp" => ['&', '\0'],
    "amp;" => ['&', '\0'],
    "and;" => ['\u{2227}', '\0'],
    "andand;" => ['\u{2a55}', '\0'],
    "andd;" => ['\u{2a5c}', '\0'],
    "andslope;" => ['\u{2a58}', '\0'],
    "andv;" => ['\u{2a5a}', '\0'],
    "ang;" => ['\u{2220}', '\0'],
    "ange;" => ['\u{29a4}', '\0'],
    "angle;" => ['\u{2220}', '\0'],
    "angmsd;" => ['\u{2221}', '\0'],
    "angmsdaa;" => ['\u{29a8}', '\0'],
    "angmsdab;" => ['\u{29a9}', '\0'],
    "angmsdac;" => ['\u{29aa}', '\0'],
    "angmsdad;" => ['\u{29ab}', '\0'],
    "angmsdae;" => ['\u{29ac}', '\0'],
    "angmsdaf;" => ['\u{29ad}', '\0'],
    "angmsdag;" => ['\u{29ae}', '\0'],
    "angmsdah;" => ['\u{29af}', '\0'],
    "angrt;" => ['\u{221f}', '\0'],
    "angrtvb;" => ['\u{22be}', '\0'],
    "angrtvbd;" => ['\u{299d}', '\0'],
    "angsph;" => ['\u{2222}', '\0'],
    "angst;" => ['\u{c5}', '\0'],
    "angzarr;" => ['\u{237c}', '\0'],
    "aogon;" => ['\u{105}', '\0'],
    "aopf;" => ['\u{1d552}', '\0'],
    "ap;" => ['\u{2248}', '\0'],
    "apE;" => ['\u{2a70}', '\0'],
    "apacir;" => ['\u{2a6f}', '\0'],
    "ape;" => ['\u{224a}', '\0'],
    "apid;" => ['\u{224b}', '\0'],
    "apos;" => ['\'', '\0'],
    "approx;" => ['\u{2248}', '\0'],
    "approxeq;" => ['\u{224a}', '\0'],
    "aring" => ['\u{e5}', '\0'],
    "aring;" => ['\u{e5}', '\0'],
    "ascr;" => ['\u{1d4b6}', '\0'],
    "ast;" => ['*', '\0'],
    "asymp;" => ['\u{2248}', '\0'],
    "asympeq;" => ['\u{224d}', '\0'],
    "atilde" => ['\u{e3}', '\0'],
    "atilde;" => ['\u{e3}', '\0'],
    "auml" => ['\u{e4}', '\0'],
    "auml;" => ['\u{e4}', '\0'],
    "awconint;" => ['\u{2233}', '\0'],
    "awint;" => ['\u{2a11}', '\0'],
    "bNot;" => ['\u{2aed}', '\0'],
    "backcong;" => ['\u{224c}', '\0'],
    "backepsilon;" => ['\u{3f6}', '\0'],
    "backprime;" => ['\u{2035}', '\0'],
    "backsim;" => ['\u{223d}', '\0'],
    "backsimeq;" => ['\u{22cd}', '\0'],
    "barvee;" => ['\u{22bd}', '\0'],
    "barwed;" => ['\u{2305}', '\0'],
    "barwedge;" => ['\u{2305}', '\0'],
    "bbrk;" => ['\u{23b5}', '\0'],
    "bbrktbrk;" => ['\u{23b6}', '\0'],
    "bcong;" => ['\u{224c}', '\0'],
    "bcy;" => ['\u{431}', '\0'],
    "bdquo;" => ['\u{201e}', '\0'],
    "becaus;" => ['\u{2235}', '\0'],
    "because;" => ['\u{2235}', '\0'],
    "bemptyv;" => ['\u{29b0}', '\0'],
    "bepsi;" => ['\u{3f6}', '\0'],
    "bernou;" => ['\u{212c}', '\0'],
    "beta;" => ['\u{3b2}', '\0'],
    "beth;" => ['\u{2136}', '\0'],
    "between;" => ['\u{226c}', '\0'],
    "bfr;" => ['\u{1d51f}', '\0'],
    "bigcap;" => ['\u{22c2}', '\0'],
    "bigcirc;" => ['\u{25ef}', '\0'],
    "bigcup;" => ['\u{22c3}', '\0'],
    "bigodot;" => ['\u{2a00}', '\0'],
    "bigoplus;" => ['\u{2a01}', '\0'],
    "bigotimes;" => ['\u{2a02}', '\0'],
    "bigsqcup;" => ['\u{2a06}', '\0'],
    "bigstar;" => ['\u{2605}', '\0'],
    "bigtriangledown;" => ['\u{25bd}', '\0'],
    "bigtriangleup;" => ['\u{25b3}', '\0'],
    "biguplus;" => ['\u{2a04}', '\0'],
    "bigvee;" => ['\u{22c1}', '\0'],
    "bigwedge;" => ['\u{22c0}', '\0'],
    "bkarow;" => ['\u{290d}', '\0'],
    "blacklozenge;" => ['\u{29eb}', '\0'],
    "blacksquare;" => ['\u{25aa}', '\0'],
    "blacktriangle;" => ['\u{25b4}', '\0'],
    "blacktriangledown;" => ['\u{25be}', '\0'],
    "blacktriangleleft;" => ['\u{25c2}', '\0'],
    "blacktriangleright;" => ['\u{25b8}', '\0'],
    "blank;" => ['\u{2423}', '\0'],
    "blk12;" => ['\u{2592}', '\0'],
    "blk14;" => ['\u{2591}', '\0'],
    "blk34;" => ['\u{2593}', '\0'],
    "block;" => ['\u{2588}', '\0'],
    "bne;" => ['=', '\u{20e5}'],
    "bnequiv;" => ['\u{2261}', '\u{20e5}'],
    "bnot;" => ['\u{2310}', '\0'],
    "bopf;" => ['\u{1d553}', '\0'],
    "bot;" => ['\u{22a5}', '\0'],
    "bottom;" => ['\u{22a5}', '\0'],
    "bowtie;" => ['\u{22c8}', '\0'],
    "boxDL;" => ['\u{2557}', '\0'],
    "boxDR;" => ['\u{2554}', '\0'],
    "boxDl;" => ['\u{2556}', '\0'],
    "boxDr;" => ['\u{2553}', '\0'],
    "boxH;" => ['\u{2550}', '\0'],
    "boxHD;" => ['\u{2566}', '\0'],
    "boxHU;" => ['\u{2569}', '\0'],
    "boxHd;" => ['\u{2564}', '\0'],
    "boxHu;" => ['\u{2567}', '\0'],
    "boxUL;" => ['\u{255d}', '\0'],
    "boxUR;" => ['\u{255a}', '\0'],
    "boxUl;" => ['\u{255c}', '\0'],
    "boxUr;" => ['\u{2559}', '\0'],
    "boxV;" => ['\u{2551}', '\0'],
    "boxVH;" => ['\u{256c}', '\0'],
    "boxVL;" => ['\u{2563}', '\0'],
    "boxVR;" => ['\u{2560}', '\0'],
    "boxVh;" => ['\u{256b}', '\0'],
    "boxVl;" => ['\u{2562}', '\0'],
    "boxVr;" => ['\u{255f}', '\0'],
    "boxbox;" => ['\u{29c9}', '\0'],
    "boxdL;" => ['\u{2555}', '\0'],
    "boxdR;" => ['\u{2552}', '\0'],
    "boxdl;" => ['\u{2510}', '\0'],
    "boxdr;" => ['\u{250c}', '\0'],
    "boxh;" => ['\u{2500}', '\0'],
    "boxhD;" => ['\u{2565}', '\0'],
    "boxhU;" => ['\u{2568}', '\0'],
    "boxhd;" => ['\u{252c}', '\0'],
    "boxhu;" => ['\u{2534}', '\0'],
    "boxminus;" => ['\u{229f}', '\0'],
    "boxplus;" => ['\u{229e}', '\0'],
    "boxtimes;" => ['\u{22a0}', '\0'],
    "boxuL;" => ['\u{255b}', '\0'],
    "boxuR;" => ['\u{2558}', '\0'],
    "boxul;" => ['\u{2518}', '\0'],
    "boxur;" => ['\u{2514}', '\0'],
    "boxv;" => ['\u{2502}', '\0'],
    "boxvH;" => ['\u{256a}', '\0'],
    "boxvL;" => ['\u{2561}', '\0'],
    "boxvR;" => ['\u{255e}', '\0'],
    "boxvh;" => ['\u{253c}', '\0'],
    "boxvl;" => ['\u{2524}', '\0'],
    "boxvr;" => ['\u{251c}', '\0'],
    "bprime;" => ['\u{2035}', '\0'],
    "breve;" => ['\u{2d8}', '\0'],
    "brvbar" => ['\u{a6}', '\0'],
    "brvbar;" => ['\u{a6}', '\0'],
    "bscr;" => ['\u{1d4b7}', '\0'],
    "bsemi;" => ['\u{204f}', '\0'],
    "bsim;" => ['\u{223d}', '\0'],
    "bsime;" => ['\u{22cd}', '\0'],
    "bsol;" => ['\\', '\0'],
    "bsolb;" => ['\u{29c5}', '\0'],
    "bsolhsub;" => ['\u{27c8}', '\0'],
    "bull;" => ['\u{2022}', '\0'],
    "bullet;" => ['\u{2022}', '\0'],
    "bump;" => ['\u{224e}', '\0'],
    "bumpE;" => ['\u{2aae}', '\0'],
    "bumpe;" => ['\u{224f}', '\0'],
    "bumpeq;" => ['\u{224f}', '\0'],
    "cacute;" => ['\u{107}', '\0'],
    "cap;" => ['\u{2229}', '\0'],
    "capand;" => ['\u{2a44}', '\0'],
    "capbrcup;" => ['\u{2a49}', '\0'],
    "capcap;" => ['\u{2a4b}', '\0'],
    "capcup;" => ['\u{2a47}', '\0'],
    "capdot;" => ['\u{2a40}', '\0'],
    "caps;" => ['\u{2229}', '\u{fe00}'],
    "caret;" => ['\u{2041}', '\0'],
    "caron;" => ['\u{2c7}', '\0'],
    "ccaps;" => ['\u{2a4d}', '\0'],
    "ccaron;" => ['\u{10d}', '\0'],
    "ccedil" => ['\u{e7}', '\0'],
    "ccedil;" => ['\u{e7}', '\0'],
    "ccirc;" => ['\u{109}', '\0'],
    "ccups;" => ['\u{2a4c}', '\0'],
    "ccupssm;" => ['\u{2a50}', '\0'],
    "cdot;" => ['\u{10b}', '\0'],
    "cedil" => ['\u{b8}', '\0'],
    "cedil;" => ['\u{b8}', '\0'],
    "cemptyv;" => ['\u{29b2}', '\0'],
    "cent" => ['\u{a2}', '\0'],
    "cent;" => ['\u{a2}', '\0'],
    "centerdot;" => ['\u{b7}', '\0'],
    "cfr;" => ['\u{1d520}', '\0'],
    "chcy;" => ['\u{447}', '\0'],
    "check;" => ['\u{2713}', '\0'],
    "checkmark;" => ['\u{2713}', '\0'],
    "chi;" => ['\u{3c7}', '\0'],
    "cir;" => ['\u{25cb}', '\0'],
    "cirE;" => ['\u{29c3}', '\0'],
    "circ;" => ['\u{2c6}', '\0'],
    "circeq;" => ['\u{2257}', '\0'],
    "circlearrowleft;" => ['\u{21ba}', '\0'],
    "circlearrowright;" => ['\u{21bb}', '\0'],
    "circledR;" => ['\u{ae}', '\0'],
    "circledS;" => ['\u{24c8}', '\0'],
    "circledast;" => ['\u{229b}', '\0'],
    "circledcirc;" => ['\u{229a}', '\0'],
    "circleddash;" => ['\u{229d}', '\0'],
    "cire;" => ['\u{2257}', '\0'],
    "cirfnint;" => ['\u{2a10}', '\0'],
    "cirmid;" => ['\u{2aef}', '\0'],
    "cirscir;" => ['\u{29c2}', '\0'],
    "clubs;" => ['\u{2663}', '\0'],
    "clubsuit;" => ['\u{2663}', '\0'],
    "colon;" => [':', '\0'],
    "colone;" => ['\u{2254}', '\0'],
    "coloneq;" => ['\u{2254}', '\0'],
    "comma;" => [',', '\0'],
    "commat;" => ['@', '\0'],
    "comp;" => ['\u{2201}', '\0'],
    "compfn;" => ['\u{2218}', '\0'],
    "complement;" => ['\u{2201}', '\0'],
    "complexes;" => ['\u{2102}', '\0'],
    "cong;" => ['\u{2245}', '\0'],
    "congdot;" => ['\u{2a6d}', '\0'],
    "conint;" => ['\u{222e}', '\0'],
    "copf;" => ['\u{1d554}', '\0'],
    "coprod;" => ['\u{2210}', '\0'],
    "copy" => ['\u{a9}', '\0'],
    "copy;" => ['\u{a9}', '\0'],
    "copysr;" => ['\u{2117}', '\0'],
    "crarr;" => ['\u{21b5}', '\0'],
    "cross;" => ['\u{2717}', '\0'],
    "cscr;" => ['\u{1d4b8}', '\0'],
    "csub;" => ['\u{2acf}', '\0'],
    "csube;" => ['\u{2ad1}', '\0'],
    "csup;" => ['\u{2ad0}', '\0'],
    "csupe;" => ['\u{2ad2}', '\0'],
    "ctdot;" => ['\u{22ef}', '\0'],
    "cudarrl;" => ['\u{2938}', '\0'],
    "cudarrr;" => ['\u{2935}', '\0'],
    "cuepr;" => ['\u{22de}', '\0'],
    "cuesc;" => ['\u{22df}', '\0'],
    "cularr;" => ['\u{21b6}', '\0'],
    "cularrp;" => ['\u{293d}', '\0'],
    "cup;" => ['\u{222a}', '\0'],
    "cupbrcap;" => ['\u{2a48}', '\0'],
    "cupcap;" => ['\u{2a46}', '\0'],
    "cupcup;" => ['\u{2a4a}', '\0'],
    "cupdot;" => ['\u{228d}', '\0'],
    "cupor;" => ['\u{2a45}', '\0'],
    "cups;" => ['\u{222a}', '\u{fe00}'],
    "curarr;" => ['\u{21b7}', '\0'],
    "curarrm;" => ['\u{293c}', '\0'],
    "curlyeqprec;" => ['\u{22de}', '\0'],
    "curlyeqsucc;" => ['\u{22df}', '\0'],
    "curlyvee;" => ['\u{22ce}', '\0'],
    "curlywedge;" => ['\u{22cf}', '\0'],
    "curren" => ['\u{a4}', '\0'],
    "curren;" => ['\u{a4}', '\0'],
    "curvearrowleft;" => ['\u{21b6}', '\0'],
    "curvearrowright;" => ['\u{21b7}', '\0'],
    "cuvee;" => ['\u{22ce}', '\0'],
    "cuwed;" => ['\u{22cf}', '\0'],
    "cwconint;" => ['\u{2232}', '\0'],
    "cwint;" => ['\u{2231}', '\0'],
    "cylcty;" => ['\u{232d}', '\0'],
    "dArr;" => ['\u{21d3}', '\0'],
    "dHar;" => ['\u{2965}', '\0'],
    "dagger;" => ['\u{2020}', '\0'],
    "daleth;" => ['\u{2138}', '\0'],
    "darr;" => ['\u{2193}', '\0'],
    "dash;" => ['\u{2010}', '\0'],
    "dashv;" => ['\u{22a3}', '\0'],
    "dbkarow;" => ['\u{290f}', '\0'],
    "dblac;" => ['\u{2dd}', '\0'],
    "dcaron;" => ['\u{10f}', '\0'],
    "dcy;" => ['\u{434}', '\0'],
    "dd;" => ['\u{2146}', '\0'],
    "ddagger;" => ['\u{2021}', '\0'],
    "ddarr;" => ['\u{21ca}', '\0'],
    "ddotseq;" => ['\u{2a77}', '\0'],
    "deg" => ['\u{b0}', '\0'],
    "deg;" => ['\u{b0}', '\0'],
    "delta;" => ['\u{3b4}', '\0'],
    "demptyv;" => ['\u{29b1}', '\0'],
    "dfisht;" => ['\u{297f}', '\0'],
    "dfr;" => ['\u{1d521}', '\0'],
    "dharl;" => ['\u{21c3}', '\0'],
    "dharr;" => ['\u{21c2}', '\0'],
    "diam;" => ['\u{22c4}', '\0'],
    "diamond;" => ['\u{22c4}', '\0'],
    "diamondsuit;" => ['\u{2666}', '\0'],
    "diams;" => ['\u{2666}', '\0'],
    "die;" => ['\u{a8}', '\0'],
    "digamma;" => ['\u{3dd}', '\0'],
    "disin;" => ['\u{22f2}', '\0'],
    "div;" => ['\u{f7}', '\0'],
    "divide" => ['\u{f7}', '\0'],
    "divide;" => ['\u{f7}', '\0'],
    "divideontimes;" => ['\u{22c7}', '\0'],
    "divonx;" => ['\u{22c7}', '\0'],
    "djcy;" => ['\u{452}', '\0'],
    "dlcorn;" => ['\u{231e}', '\0'],
    "dlcrop;" => ['\u{230d}', '\0'],
    "dollar;" => ['$', '\0'],
    "dopf;" => ['\u{1d555}', '\0'],
    "dot;" => ['\u{2d9}', '\0'],
    "doteq;" => ['\u{2250}', '\0'],
    "doteqdot;" => ['\u{2251}', '\0'],
    "dotminus;" => ['\u{2238}', '\0'],
    "dotplus;" => ['\u{2214}', '\0'],
    "dotsquare;" => ['\u{22a1}', '\0'],
    "doublebarwedge;" => ['\u{2306}', '\0'],
    "downarrow;" => ['\u{2193}', '\0'],
    "downdownarrows;" => ['\u{21ca}', '\0'],
    "downharpoonleft;" => ['\u{21c3}', '\0'],
    "downharpoonright;" => ['\u{21c2}', '\0'],
    "drbkarow;" => ['\u{2910}', '\0'],
    "drcorn;" => ['\u{231f}', '\0'],
    "drcrop;" => ['\u{230c}', '\0'],
    "dscr;" => ['\u{1d4b9}', '\0'],
    "dscy;" => ['\u{455}', '\0'],
    "dsol;" => ['\u{29f6}', '\0'],
    "dstrok;" => ['\u{111}', '\0'],
    "dtdot;" => ['\u{22f1}', '\0'],
    "dtri;" => ['\u{25bf}', '\0'],
    "dtrif;" => ['\u{25be}', '\0'],
    "duarr;" => ['\u{21f5}', '\0'],
    "duhar;" => ['\u{296f}', '\0'],
    "dwangle;" => ['\u{29a6}', '\0'],
    "dzcy;" => ['\u{45f}', '\0'],
    "dzigrarr;" => ['\u{27ff}', '\0'],
    "eDDot;" => ['\u{2a77}', '\0'],
    "eDot;" => ['\u{2251}', '\0'],
    "eacute" => ['\u{e9}', '\0'],
    "eacute;" => ['\u{e9}', '\0'],
    "easter;" => ['\u{2a6e}', '\0'],
    "ecaron;" => ['\u{11b}', '\0'],
    "ecir;" => ['\u{2256}', '\0'],
    "ecirc" => ['\u{ea}', '\0'],
    "ecirc;" => ['\u{ea}', '\0'],
    "ecolon;" => ['\u{2255}', '\0'],
    "ecy;" => ['\u{44d}', '\0'],
    "edot;" => ['\u{117}', '\0'],
    "ee;" => ['\u{2147}', '\0'],
    "efDot;" => ['\u{2252}', '\0'],
    "efr;" => ['\u{1d522}', '\0'],
    "eg;" => ['\u{2a9a}', '\0'],
    "egrave" => ['\u{e8}', '\0'],
    "egrave;" => ['\u{e8}', '\0'],
    "egs;" => ['\u{2a96}', '\0'],
    "egsdot;" => ['\u{2a98}', '\0'],
    "el;" => ['\u{2a99}', '\0'],
    "elinters;" => ['\u{23e7}', '\0'],
    "ell;" => ['\u{2113}', '\0'],
    "els;" => ['\u{2a95}', '\0'],
    "elsdot;" => ['\u{2a97}', '\0'],
    "emacr;" => ['\u{113}', '\0'],
    "empty;" => ['\u{2205}', '\0'],
    "emptyset;" => ['\u{2205}', '\0'],
    "emptyv;" => ['\u{2205}', '\0'],
    "emsp13;" => ['\u{2004}', '\0'],
    "emsp14;" => ['\u{2005}', '\0'],
    "emsp;" => ['\u{2003}', '\0'],
    "eng;" => ['\u{14b}', '\0'],
    "ensp;" => ['\u{2002}', '\0'],
    "eogon;" => ['\u{119}', '\0'],
    "eopf;" => ['\u{1d556}', '\0'],
    "epar;" => ['\u{22d5}', '\0'],
    "eparsl;" => ['\u{29e3}', '\0'],
    "eplus;" => ['\u{2a71}', '\0'],
    "epsi;" => ['\u{3b5}', '\0'],
    "epsilon;" => ['\u{3b5}', '\0'],
    "epsiv;" => ['\u{3f5}', '\0'],
    "eqcirc;" => ['\u{2256}', '\0'],
    "eqcolon;" => ['\u{2255}', '\0'],
    "eqsim;" => ['\u{2242}', '\0'],
    "eqslantgtr;" => ['\u{2a96}', '\0'],
    "eqslantless;" => ['\u{2a95}', '\0'],
    "equals;" => ['=', '\0'],
    "equest;" => ['\u{225f}', '\0'],
    "equiv;" => ['\u{2261}', '\0'],
    "equivDD;" => ['\u{2a78}', '\0'],
    "eqvparsl;" => ['\u{29e5}', '\0'],
    "erDot;" => ['\u{2253}', '\0'],
    "erarr;" => ['\u{2971}', '\0'],
    "escr;" => ['\u{212f}', '\0'],
    "esdot;" => ['\u{2250}', '\0'],
    "esim;" => ['\u{2242}', '\0'],
    "eta;" => ['\u{3b7}', '\0'],
    "eth" => ['\u{f0}', '\0'],
    "eth;" => ['\u{f0}', '\0'],
    "euml" => ['\u{eb}', '\0'],
    "euml;" => ['\u{eb}', '\0'],
    "euro;" => ['\u{20ac}', '\0'],
    "excl;" => ['!', '\0'],
    "exist;" => ['\u{2203}', '\0'],
    "expectation;" => ['\u{2130}', '\0'],
    "exponentiale;" => ['\u{2147}', '\0'],
    "fallingdotseq;" => ['\u{2252}', '\0'],
    "fcy;" => ['\u{444}', '\0'],
    "female;" => ['\u{2640}', '\0'],
    "ffilig;" => ['\u{fb03}', '\0'],
    "fflig;" => ['\u{fb00}', '\0'],
    "ffllig;" => ['\u{fb04}', '\0'],
    "ffr;" => ['\u{1d523}', '\0'],
    "filig;" => ['\u{fb01}', '\0'],
    "fjlig;" => ['f', 'j'],
    "flat;" => ['\u{266d}', '\0'],
    "fllig;" => ['\u{fb02}', '\0'],
    "fltns;" => ['\u{25b1}', '\0'],
    "fnof;" => ['\u{192}', '\0'],
    "fopf;" => ['\u{1d557}', '\0'],
    "forall;" => ['\u{2200}', '\0'],
    "fork;" => ['\u{22d4}', '\0'],
    "forkv;" => ['\u{2ad9}', '\0'],
    "fpartint;" => ['\u{2a0d}', '\0'],
    "frac12" => ['\u{bd}', '\0'],
    "frac12;" => ['\u{bd}', '\0'],
    "frac13;" => ['\u{2153}', '\0'],
    "frac14" => ['\u{bc}', '\0'],
    "frac14;" => ['\u{bc}', '\0'],
    "frac15;" => ['\u{2155}', '\0'],
    "frac16;" => ['\u{2159}', '\0'],
    "frac18;" => ['\u{215b}', '\0'],
    "frac23;" => ['\u{2154}', '\0'],
    "frac25;" => ['\u{2156}', '\0'],
    "frac34" => ['\u{be}', '\0'],
    "frac34;" => ['\u{be}', '\0'],
    "frac35;" => ['\u{2157}', '\0'],
    "frac38;" => ['\u{215c}', '\0'],
    "frac45;" => ['\u{2158}', '\0'],
    "frac56;" => ['\u{215a}', '\0'],
    "frac58;" => ['\u{215d}', '\0'],
    "frac78;" => ['\u{215e}', '\0'],
    "frasl;" => ['\u{2044}', '\0'],
    "frown;" => ['\u{2322}', '\0'],
    "fscr;" => ['\u{1d4bb}', '\0'],
    "gE;" => ['\u{2267}', '\0'],
    "gEl;" => ['\u{2a8c}', '\0'],
    "gacute;" => ['\u{1f5}', '\0'],
    "gamma;" => ['\u{3b3}', '\0'],
    "gammad;" => ['\u{3dd}', '\0'],
    "gap;" => ['\u{2a86}', '\0'],
    "gbreve;" => ['\u{11f}', '\0'],
    "gcirc;" => ['\u{11d}', '\0'],
    "gcy;" => ['\u{433}', '\0'],
    "gdot;" => ['\u{121}', '\0'],
    "ge;" => ['\u{2265}', '\0'],
    "gel;" => ['\u{22db}', '\0'],
    "geq;" => ['\u{2265}', '\0'],
    "geqq;" => ['\u{2267}', '\0'],
    "geqslant;" => ['\u{2a7e}', '\0'],
    "ges;" => ['\u{2a7e}', '\0'],
    "gescc;" => ['\u{2aa9}', '\0'],
    "gesdot;" => ['\u{2a80}', '\0'],
    "gesdoto;" => ['\u{2a82}', '\0'],
    "gesdotol;" => ['\u{2a84}', '\0'],
    "gesl;" => ['\u{22db}', '\u{fe00}'],
    "gesles;" => ['\u{2a94}', '\0'],
    "gfr;" => ['\u{1d524}', '\0'],
    "gg;" => ['\u{226b}', '\0'],
    "ggg;" => ['\u{22d9}', '\0'],
    "gimel;" => ['\u{2137}', '\0'],
    "gjcy;" => ['\u{453}', '\0'],
    "gl;" => ['\u{2277}', '\0'],
    "glE;" => ['\u{2a92}', '\0'],
    "gla;" => ['\u{2aa5}', '\0'],
    "glj;" => ['\u{2aa4}', '\0'],
    "gnE;" => ['\u{2269}', '\0'],
    "gnap;" => ['\u{2a8a}', '\0'],
    "gnapprox;" => ['\u{2a8a}', '\0'],
    "gne;" => ['\u{2a88}', '\0'],
    "gneq;" => ['\u{2a88}', '\0'],
    "gneqq;" => ['\u{2269}', '\0'],
    "gnsim;" => ['\u{22e7}', '\0'],
    "gopf;" => ['\u{1d558}', '\0'],
    "grave;" => ['`', '\0'],
    "gscr;" => ['\u{210a}', '\0'],
    "gsim;" => ['\u{2273}', '\0'],
    "gsime;" => ['\u{2a8e}', '\0'],
    "gsiml;" => ['\u{2a90}', '\0'],
    "gt" => ['>', '\0'],
    "gt;" => ['>', '\0'],
    "gtcc;" => ['\u{2aa7}', '\0'],
    "gtcir;" => ['\u{2a7a}', '\0'],
    "gtdot;" => ['\u{22d7}', '\0'],
    "gtlPar;" => ['\u{2995}', '\0'],
    "gtquest;" => ['\u{2a7c}', '\0'],
    "gtrapprox;" => ['\u{2a86}', '\0'],
    "gtrarr;" => ['\u{2978}', '\0'],
    "gtrdot;" => ['\u{22d7}', '\0'],
    "gtreqless;" => ['\u{22db}', '\0'],
    "gtreqqless;" => ['\u{2a8c}', '\0'],
    "gtrless;" => ['\u{2277}', '\0'],
    "gtrsim;" => ['\u{2273}', '\0'],
    "gvertneqq;" => ['\u{2269}', '\u{fe00}'],
    "gvnE;" => ['\u{2269}', '\u{fe00}'],
    "hArr;" => ['\u{21d4}', '\0'],
    "hairsp;" => ['\u{200a}', '\0'],
    "half;" => ['\u{bd}', '\0'],
    "hamilt;" => ['\u{210b}', '\0'],
    "hardcy;" => ['\u{44a}', '\0'],
    "harr;" => ['\u{2194}', '\0'],
    "harrcir;" => ['\u{2948}', '\0'],
    "harrw;" => ['\u{21ad}', '\0'],
    "hbar;" => ['\u{210f}', '\0'],
    "hcirc;" => ['\u{125}', '\0'],
    "hearts;" => ['\u{2665}', '\0'],
    "heartsuit;" => ['\u{2665}', '\0'],
    "hellip;" => ['\u{2026}', '\0'],
    "hercon;" => ['\u{22b9}', '\0'],
    "hfr;" => ['\u{1d525}', '\0'],
    "hksearow;" => ['\u{2925}', '\0'],
    "hkswarow;" => ['\u{2926}', '\0'],
    "hoarr;" => ['\u{21ff}', '\0'],
    "homtht;" => ['\u{223b}', '\0'],
    "hookleftarrow;" => ['\u{21a9}', '\0'],
    "hookrightarrow;" => ['\u{21aa}', '\0'],
    "hopf;" => ['\u{1d559}', '\0'],
    "horbar;" => ['\u{2015}', '\0'],
    "hscr;" => ['\u{1d4bd}', '\0'],
    "hslash;" => ['\u{210f}', '\0'],
    "hstrok;" => ['\u{127}', '\0'],
    "hybull;" => ['\u{2043}', '\0'],
    "hyphen;" => ['\u{2010}', '\0'],
    "iacute" => ['\u{ed}', '\0'],
    "iacute;" => ['\u{ed}', '\0'],
    "ic;" => ['\u{2063}', '\0'],
    "icirc" => ['\u{ee}', '\0'],
    "icirc;" => ['\u{ee}', '\0'],
    "icy;" => ['\u{438}', '\0'],
    "iecy;" => ['\u{435}', '\0'],
    "iexcl" => ['\u{a1}', '\0'],
    "iexcl;" => ['\u{a1}', '\0'],
    "iff;" => ['\u{21d4}', '\0'],
    "ifr;" => ['\u{1d526}', '\0'],
    "igrave" => ['\u{ec}', '\0'],
    "igrave;" => ['\u{ec}', '\0'],
    "ii;" => ['\u{2148}', '\0'],
    "iiiint;" => ['\u{2a0c}', '\0'],
    "iiint;" => ['\u{222d}', '\0'],
    "iinfin;" => ['\u{29dc}', '\0'],
    "iiota;" => ['\u{2129}', '\0'],
    "ijlig;" => ['\u{133}', '\0'],
    "imacr;" => ['\u{12b}', '\0'],
    "image;" => ['\u{2111}', '\0'],
    "imagline;" => ['\u{2110}', '\0'],
    "imagpart;" => ['\u{2111}', '\0'],
    "imath;" => ['\u{131}', '\0'],
    "imof;" => ['\u{22b7}', '\0'],
    "imped;" => ['\u{1b5}', '\0'],
    "in;" => ['\u{2208}', '\0'],
    "incare;" => ['\u{2105}', '\0'],
    "infin;" => ['\u{221e}', '\0'],
    "infintie;" => ['\u{29dd}', '\0'],
    "inodot;" => ['\u{131}', '\0'],
    "int;" => ['\u{222b}', '\0'],
    "intcal;" => ['\u{22ba}', '\0'],
    "integers;" => ['\u{2124}', '\0'],
    "intercal;" => ['\u{22ba}', '\0'],
    "intlarhk;" => ['\u{2a17}', '\0'],
    "intprod;" => ['\u{2a3c}', '\0'],
    "iocy;" => ['\u{451}', '\0'],
    "iogon;" => ['\u{12f}', '\0'],
    "iopf;" => ['\u{1d55a}', '\0'],
    "iota;" => ['\u{3b9}', '\0'],
    "iprod;" => ['\u{2a3c}', '\0'],
    "iquest" => ['\u{bf}', '\0'],
    "iquest;" => ['\u{bf}', '\0'],
    "iscr;" => ['\u{1d4be}', '\0'],
    "isin;" => ['\u{2208}', '\0'],
    "isinE;" => ['\u{22f9}', '\0'],
    "isindot;" => ['\u{22f5}', '\0'],
    "isins;" => ['\u{22f4}', '\0'],
    "isinsv;" => ['\u{22f3}', '\0'],
    "isinv;" => ['\u{2208}', '\0'],
    "it;" => ['\u{2062}', '\0'],
    "itilde;" => ['\u{129}', '\0'],
    "iukcy;" => ['\u{456}', '\0'],
    "iuml" => ['\u{ef}', '\0'],
    "iuml;" => ['\u{ef}', '\0'],
    "jcirc;" => ['\u{135}', '\0'],
    "jcy;" => ['\u{439}', '\0'],
    "jfr;" => ['\u{1d527}', '\0'],
    "jmath;" => ['\u{237}', '\0'],
    "jopf;" => ['\u{1d55b}', '\0'],
    "jscr;" => ['\u{1d4bf}', '\0'],
    "jsercy;" => ['\u{458}', '\0'],
    "jukcy;" => ['\u{454}', '\0'],
    "kappa;" => ['\u{3ba}', '\0'],
    "kappav;" => ['\u{3f0}', '\0'],
    "kcedil;" => ['\u{137}', '\0'],
    "kcy;" => ['\u{43a}', '\0'],
    "kfr;" => ['\u{1d528}', '\0'],
    "kgreen;" => ['\u{138}', '\0'],
    "khcy;" => ['\u{445}', '\0'],
    "kjcy;" => ['\u{45c}', '\0'],
    "kopf;" => ['\u{1d55c}', '\0'],
    "kscr;" => ['\u{1d4c0}', '\0'],
    "lAarr;" => ['\u{21da}', '\0'],
    "lArr;" => ['\u{21d0}', '\0'],
    "lAtail;" => ['\u{291b}', '\0'],
    "lBarr;" => ['\u{290e}', '\0'],
    "lE;" => ['\u{2266}', '\0'],
    "lEg;" => ['\u{2a8b}', '\0'],
    "lHar;" => ['\u{2962}', '\0'],
    "lacute;" => ['\u{13a}', '\0'],
    "laemptyv;" => ['\u{29b4}', '\0'],
    "lagran;" => ['\u{2112}', '\0'],
    "lambda;" => ['\u{3bb}', '\0'],
    "lang;" => ['\u{27e8}', '\0'],
    "langd;" => ['\u{2991}', '\0'],
    "langle;" => ['\u{27e8}', '\0'],
    "lap;" => ['\u{2a85}', '\0'],
    "laquo" => ['\u{ab}', '\0'],
    "laquo;" => ['\u{ab}', '\0'],
    "larr;" => ['\u{2190}', '\0'],
    "larrb;" => ['\u{21e4}', '\0'],
    "larrbfs;" => ['\u{291f}', '\0'],
    "larrfs;" => ['\u{291d}', '\0'],
    "larrhk;" => ['\u{21a9}', '\0'],
    "larrlp;" => ['\u{21ab}', '\0'],
    "larrpl;" => ['\u{2939}', '\0'],
    "larrsim;" => ['\u{2973}', '\0'],
    "larrtl;" => ['\u{21a2}', '\0'],
    "lat;" => ['\u{2aab}', '\0'],
    "latail;" => ['\u{2919}', '\0'],
    "late;" => ['\u{2aad}', '\0'],
    "lates;" => ['\u{2aad}', '\u{fe00}'],
    "lbarr;" => ['\u{290c}', '\0'],
    "lbbrk;" => ['\u{2772}', '\0'],
    "lbrace;" => ['{', '\0'],
    "lbrack;" => ['[', '\0'],
    "lbrke;" => ['\u{298b}', '\0'],
    "lbrksld;" => ['\u{298f}', '\0'],
    "lbrkslu;" => ['\u{298d}', '\0'],
    "lcaron;" => ['\u{13e}', '\0'],
    "lcedil;" => ['\u{13c}', '\0'],
    "lceil;" => ['\u{2308}', '\0'],
    "lcub;" => ['{', '\0'],
    "lcy;" => ['\u{43b}', '\0'],
    "ldca;" => ['\u{2936}', '\0'],
    "ldquo;" => ['\u{201c}', '\0'],
    "ldquor;" => ['\u{201e}', '\0'],
    "ldrdhar;" => ['\u{2967}', '\0'],
    "ldrushar;" => ['\u{294b}', '\0'],
    "ldsh;" => ['\u{21b2}', '\0'],
    "le;" => ['\u{2264}', '\0'],
    "leftarrow;" => ['\u{2190}', '\0'],
    "leftarrowtail;" => ['\u{21a2}', '\0'],
    "leftharpoondown;" => ['\u{21bd}', '\0'],
    "leftharpoonup;" => ['\u{21bc}', '\0'],
    "leftleftarrows;" => ['\u{21c7}', '\0'],
    "leftrightarrow;" => ['\u{2194}', '\0'],
    "leftrightarrows;" => ['\u{21c6}', '\0'],
    "leftrightharpoons;" => ['\u{21cb}', '\0'],
    "leftrightsquigarrow;" => ['\u{21ad}', '\0'],
    "leftthreetimes;" => ['\u{22cb}', '\0'],
    "leg;" => ['\u{22da}', '\0'],
    "leq;" => ['\u{2264}', '\0'],
    "leqq;" => ['\u{2266}', '\0'],
    "leqslant;" => ['\u{2a7d}', '\0'],
    "les;" => ['\u{2a7d}', '\0'],
    "lescc;" => ['\u{2aa8}', '\0'],
    "lesdot;" => ['\u{2a7f}', '\0'],
    "lesdoto;" => ['\u{2a81}', '\0'],
    "lesdotor;" => ['\u{2a83}', '\0'],
    "lesg;" => ['\u{22da}', '\u{fe00}'],
    "lesges;" => ['\u{2a93}', '\0'],
    "lessapprox;" => ['\u{2a85}', '\0'],
    "lessdot;" => ['\u{22d6}', '\0'],
    "lesseqgtr;" => ['\u{22da}', '\0'],
    "lesseqqgtr;" => ['\u{2a8b}', '\0'],
    "lessgtr;" => ['\u{2276}', '\0'],
    "lesssim;" => ['\u{2272}', '\0'],
    "lfisht;" => ['\u{297c}', '\0'],
    "lfloor;" => ['\u{230a}', '\0'],
    "lfr;" => ['\u{1d529}', '\0'],
    "lg;" => ['\u{2276}', '\0'],
    "lgE;" => ['\u{2a91}', '\0'],
    "lhard;" => ['\u{21bd}', '\0'],
    "lharu;" => ['\u{21bc}', '\0'],
    "lharul;" => ['\u{296a}', '\0'],
    "lhblk;" => ['\u{2584}', '\0'],
    "ljcy;" => ['\u{459}', '\0'],
    "ll;" => ['\u{226a}', '\0'],
    "llarr;" => ['\u{21c7}', '\0'],
    "llcorner;" => ['\u{231e}', '\0'],
    "llhard;" => ['\u{296b}', '\0'],
    "lltri;" => ['\u{25fa}', '\0'],
    "lmidot;" => ['\u{140}', '\0'],
    "lmoust;" => ['\u{23b0}', '\0'],
    "lmoustache;" => ['\u{23b0}', '\0'],
    "lnE;" => ['\u{2268}', '\0'],
    "lnap;" => ['\u{2a89}', '\0'],
    "lnapprox;" => ['\u{2a89}', '\0'],
    "lne;" => ['\u{2a87}', '\0'],
    "lneq;" => ['\u{2a87}', '\0'],
    "lneqq;" => ['\u{2268}', '\0'],
    "lnsim;" => ['\u{22e6}', '\0'],
    "loang;" => ['\u{27ec}', '\0'],
    "loarr;" => ['\u{21fd}', '\0'],
    "lobrk;" => ['\u{27e6}', '\0'],
    "longleftarrow;" => ['\u{27f5}', '\0'],
    "longleftrightarrow;" => ['\u{27f7}', '\0'],
    "longmapsto;" => ['\u{27fc}', '\0'],
    "longrightarrow;" => ['\u{27f6}', '\0'],
    "looparrowleft;" => ['\u{21ab}', '\0'],
    "looparrowright;" => ['\u{21ac}', '\0'],
    "lopar;" => ['\u{2985}', '\0'],
    "lopf;" => ['\u{1d55d}', '\0'],
    "loplus;" => ['\u{2a2d}', '\0'],
    "lotimes;" => ['\u{2a34}', '\0'],
    "lowast;" => ['\u{2217}', '\0'],
    "lowbar;" => ['_', '\0'],
    "loz;" => ['\u{25ca}', '\0'],
    "lozenge;" => ['\u{25ca}', '\0'],
    "lozf;" => ['\u{29eb}', '\0'],
    "lpar;" => ['(', '\0'],
    "lparlt;" => ['\u{2993}', '\0'],
    "lrarr;" => ['\u{21c6}', '\0'],
    "lrcorner;" => ['\u{231f}', '\0'],
    "lrhar;" => ['\u{21cb}', '\0'],
    "lrhard;" => ['\u{296d}', '\0'],
    "lrm;" => ['\u{200e}', '\0'],
    "lrtri;" => ['\u{22bf}', '\0'],
    "lsaquo;" => ['\u{2039}', '\0'],
    "lscr;" => ['\u{1d4c1}', '\0'],
    "lsh;" => ['\u{21b0}', '\0'],
    "lsim;" => ['\u{2272}', '\0'],
    "lsime;" => ['\u{2a8d}', '\0'],
    "lsimg;" => ['\u{2a8f}', '\0'],
    "lsqb;" => ['[', '\0'],
    "lsquo;" => ['\u{2018}', '\0'],
    "lsquor;" => ['\u{201a}', '\0'],
    "lstrok;" => ['\u{142}', '\0'],
    "lt" => ['<', '\0'],
    "lt;" => ['<', '\0'],
    "ltcc;" => ['\u{2aa6}', '\0'],
    "ltcir;" => ['\u{2a79}', '\0'],
    "ltdot;" => ['\u{22d6}', '\0'],
    "lthree;" => ['\u{22cb}', '\0'],
    "ltimes;" => ['\u{22c9}', '\0'],
    "ltlarr;" => ['\u{2976}', '\0'],
    "ltquest;" => ['\u{2a7b}', '\0'],
    "ltrPar;" => ['\u{2996}', '\0'],
    "ltri;" => ['\u{25c3}', '\0'],
    "ltrie;" => ['\u{22b4}', '\0'],
    "ltrif;" => ['\u{25c2}', '\0'],
    "lurdshar;" => ['\u{294a}', '\0'],
    "luruhar;" => ['\u{2966}', '\0'],
    "lvertneqq;" => ['\u{2268}', '\u{fe00}'],
    "lvnE;" => ['\u{2268}', '\u{fe00}'],
    "mDDot;" => ['\u{223a}', '\0'],
    "macr" => ['\u{af}', '\0'],
    "macr;" => ['\u{af}', '\0'],
    "male;" => ['\u{2642}', '\0'],
    "malt;" => ['\u{2720}', '\0'],
    "maltese;" => ['\u{2720}', '\0'],
    "map;" => ['\u{21a6}', '\0'],
    "mapsto;" => ['\u{21a6}', '\0'],
    "mapstodown;" => ['\u{21a7}', '\0'],
    "mapstoleft;" => ['\u{21a4}', '\0'],
    "mapstoup;" => ['\u{21a5}', '\0'],
    "marker;" => ['\u{25ae}', '\0'],
    "mcomma;" => ['\u{2a29}', '\0'],
    "mcy;" => ['\u{43c}', '\0'],
    "mdash;" => ['\u{2014}', '\0'],
    "measuredangle;" => ['\u{2221}', '\0'],
    "mfr;" => ['\u{1d52a}', '\0'],
    "mho;" => ['\u{2127}', '\0'],
    "micro" => ['\u{b5}', '\0'],
    "micro;" => ['\u{b5}', '\0'],
    "mid;" => ['\u{2223}', '\0'],
    "midast;" => ['*', '\0'],
    "midcir;" => ['\u{2af0}', '\0'],
    "middot" => ['\u{b7}', '\0'],
    "middot;" => ['\u{b7}', '\0'],
    "minus;" => ['\u{2212}', '\0'],
    "minusb;" => ['\u{229f}', '\0'],
    "minusd;" => ['\u{2238}', '\0'],
    "minusdu;" => ['\u{2a2a}', '\0'],
    "mlcp;" => ['\u{2adb}', '\0'],
    "mldr;" => ['\u{2026}', '\0'],
    "mnplus;" => ['\u{2213}', '\0'],
    "models;" => ['\u{22a7}', '\0'],
    "mopf;" => ['\u{1d55e}', '\0'],
    "mp;" => ['\u{2213}', '\0'],
    "mscr;" => ['\u{1d4c2}', '\0'],
    "mstpos;" => ['\u{223e}', '\0'],
    "mu;" => ['\u{3bc}', '\0'],
    "multimap;" => ['\u{22b8}', '\0'],
    "mumap;" => ['\u{22b8}', '\0'],
    "nGg;" => ['\u{22d9}', '\u{338}'],
    "nGt;" => ['\u{226b}', '\u{20d2}'],
    "nGtv;" => ['\u{226b}', '\u{338}'],
    "nLeftarrow;" => ['\u{21cd}', '\0'],
    "nLeftrightarrow;" => ['\u{21ce}', '\0'],
    "nLl;" => ['\u{22d8}', '\u{338}'],
    "nLt;" => ['\u{226a}', '\u{20d2}'],
    "nLtv;" => ['\u{226a}', '\u{338}'],
    "nRightarrow;" => ['\u{21cf}', '\0'],
    "nVDash;" => ['\u{22af}', '\0'],
    "nVdash;" => ['\u{22ae}', '\0'],
    "nabla;" => ['\u{2207}', '\0'],
    "nacute;" => ['\u{144}', '\0'],
    "nang;" => ['\u{2220}', '\u{20d2}'],
    "nap;" => ['\u{2249}', '\0'],
    "napE;" => ['\u{2a70}', '\u{338}'],
    "napid;" => ['\u{224b}', '\u{338}'],
    "napos;" => ['\u{149}', '\0'],
    "napprox;" => ['\u{2249}', '\0'],
    "natur;" => ['\u{266e}', '\0'],
    "natural;" => ['\u{266e}', '\0'],
    "naturals;" => ['\u{2115}', '\0'],
    "nbsp" => ['\u{a0}', '\0'],
    "nbsp;" => ['\u{a0}', '\0'],
    "nbump;" => ['\u{224e}', '\u{338}'],
    "nbumpe;" => ['\u{224f}', '\u{338}'],
    "ncap;" => ['\u{2a43}', '\0'],
    "ncaron;" => ['\u{148}', '\0'],
    "ncedil;" => ['\u{146}', '\0'],
    "ncong;" => ['\u{2247}', '\0'],
    "ncongdot;" => ['\u{2a6d}', '\u{338}'],
    "ncup;" => ['\u{2a42}', '\0'],
    "ncy;" => ['\u{43d}', '\0'],
    "ndash;" => ['\u{2013}', '\0'],
    "ne;" => ['\u{2260}', '\0'],
    "neArr;" => ['\u{21d7}', '\0'],
    "nearhk;" => ['\u{2924}', '\0'],
    "nearr;" => ['\u{2197}', '\0'],
    "nearrow;" => ['\u{2197}', '\0'],
    "nedot;" => ['\u{2250}', '\u{338}'],
    "nequiv;" => ['\u{2262}', '\0'],
    "nesear;" => ['\u{2928}', '\0'],
    "nesim;" => ['\u{2242}', '\u{338}'],
    "nexist;" => ['\u{2204}', '\0'],
    "nexists;" => ['\u{2204}', '\0'],
    "nfr;" => ['\u{1d52b}', '\0'],
    "ngE;" => ['\u{2267}', '\u{338}'],
    "nge;" => ['\u{2271}', '\0'],
    "ngeq;" => ['\u{2271}', '\0'],
    "ngeqq;" => ['\u{2267}', '\u{338}'],
    "ngeqslant;" => ['\u{2a7e}', '\u{338}'],
    "nges;" => ['\u{2a7e}', '\u{338}'],
    "ngsim;" => ['\u{2275}', '\0'],
    "ngt;" => ['\u{226f}', '\0'],
    "ngtr;" => ['\u{226f}', '\0'],
    "nhArr;" => ['\u{21ce}', '\0'],
    "nharr;" => ['\u{21ae}', '\0'],
    "nhpar;" => ['\u{2af2}', '\0'],
    "ni;" => ['\u{220b}', '\0'],
    "nis;" => ['\u{22fc}', '\0'],
    "nisd;" => ['\u{22fa}', '\0'],
    "niv;" => ['\u{220b}', '\0'],
    "njcy;" => ['\u{45a}', '\0'],
    "nlArr;" => ['\u{21cd}', '\0'],
    "nlE;" => ['\u{2266}', '\u{338}'],
    "nlarr;" => ['\u{219a}', '\0'],
    "nldr;" => ['\u{2025}', '\0'],
    "nle;" => ['\u{2270}', '\0'],
    "nleftarrow;" => ['\u{219a}', '\0'],
    "nleftrightarrow;" => ['\u{21ae}', '\0'],
    "nleq;" => ['\u{2270}', '\0'],
    "nleqq;" => ['\u{2266}', '\u{338}'],
    "nleqslant;" => ['\u{2a7d}', '\u{338}'],
    "nles;" => ['\u{2a7d}', '\u{338}'],
    "nless;" => ['\u{226e}', '\0'],
    "nlsim;" => ['\u{2274}', '\0'],
    "nlt;" => ['\u{226e}', '\0'],
    "nltri;" => ['\u{22ea}', '\0'],
    "nltrie;" => ['\u{22ec}', '\0'],
    "nmid;" => ['\u{2224}', '\0'],
    "nopf;" => ['\u{1d55f}', '\0'],
    "not" => ['\u{ac}', '\0'],
    "not;" => ['\u{ac}', '\0'],
    "notin;" => ['\u{2209}', '\0'],
    "notinE;" => ['\u{22f9}', '\u{338}'],
    "notindot;" => ['\u{22f5}', '\u{338}'],
    "notinva;" => ['\u{2209}', '\0'],
    "notinvb;" => ['\u{22f7}', '\0'],
    "notinvc;" => ['\u{22f6}', '\0'],
    "notni;" => ['\u{220c}', '\0'],
    "notniva;" => ['\u{220c}', '\0'],
    "notnivb;" => ['\u{22fe}', '\0'],
    "notnivc;" => ['\u{22fd}', '\0'],
    "npar;" => ['\u{2226}', '\0'],
    "nparallel;" => ['\u{2226}', '\0'],
    "nparsl;" => ['\u{2afd}', '\u{20e5}'],
    "npart;" => ['\u{2202}', '\u{338}'],
    "npolint;" => ['\u{2a14}', '\0'],
    "npr;" => ['\u{2280}', '\0'],
    "nprcue;" => ['\u{22e0}', '\0'],
    "npre;" => ['\u{2aaf}', '\u{338}'],
    "nprec;" => ['\u{2280}', '\0'],
    "npreceq;" => ['\u{2aaf}', '\u{338}'],
    "nrArr;" => ['\u{21cf}', '\0'],
    "nrarr;" => ['\u{219b}', '\0'],
    "nrarrc;" => ['\u{2933}', '\u{338}'],
    "nrarrw;" => ['\u{219d}', '\u{338}'],
    "nrightarrow;" => ['\u{219b}', '\0'],
    "nrtri;" => ['\u{22eb}', '\0'],
    "nrtrie;" => ['\u{22ed}', '\0'],
    "nsc;" => ['\u{2281}', '\0'],
    "nsccue;" => ['\u{22e1}', '\0'],
    "nsce;" => ['\u{2ab0}', '\u{338}'],
    "nscr;" => ['\u{1d4c3}', '\0'],
    "nshortmid;" => ['\u{2224}', '\0'],
    "nshortparallel;" => ['\u{2226}', '\0'],
    "nsim;" => ['\u{2241}', '\0'],
    "nsime;" => ['\u{2244}', '\0'],
    "nsimeq;" => ['\u{2244}', '\0'],
    "nsmid;" => ['\u{2224}', '\0'],
    "nspar;" => ['\u{2226}', '\0'],
    "nsqsube;" => ['\u{22e2}', '\0'],
    "nsqsupe;" => ['\u{22e3}', '\0'],
    "nsub;" => ['\u{2284}', '\0'],
    "nsubE;" => ['\u{2ac5}', '\u{338}'],
    "nsube;" => ['\u{2288}', '\0'],
    "nsubset;" => ['\u{2282}', '\u{20d2}'],
    "nsubseteq;" => ['\u{2288}', '\0'],
    "nsubseteqq;" => ['\u{2ac5}', '\u{338}'],
    "nsucc;" => ['\u{2281}', '\0'],
    "nsucceq;" => ['\u{2ab0}', '\u{338}'],
    "nsup;" => ['\u{2285}', '\0'],
    "nsupE;" => ['\u{2ac6}', '\u{338}'],
    "nsupe;" => ['\u{2289}', '\0'],
    "nsupset;" => ['\u{2283}', '\u{20d2}'],
    "nsupseteq;" => ['\u{2289}', '\0'],
    "nsupseteqq;" => ['\u{2ac6}', '\u{338}'],
    "ntgl;" => ['\u{2279}', '\0'],
    "ntilde" => ['\u{f1}', '\0'],
    "ntilde;" => ['\u{f1}', '\0'],
    "ntlg;" => ['\u{2278}', '\0'],
    "ntriangleleft;" => ['\u{22ea}', '\0'],
    "ntrianglelefteq;" => ['\u{22ec}', '\0'],
    "ntriangleright;" => ['\u{22eb}', '\0'],
    "ntrianglerighteq;" => ['\u{22ed}', '\0'],
    "nu;" => ['\u{3bd}', '\0'],
    "num;" => ['#', '\0'],
    "numero;" => ['\u{2116}', '\0'],
    "numsp;" => ['\u{2007}', '\0'],
    "nvDash;" => ['\u{22ad}', '\0'],
    "nvHarr;" => ['\u{2904}', '\0'],
    "nvap;" => ['\u{224d}', '\u{20d2}'],
    "nvdash;" => ['\u{22ac}', '\0'],
    "nvge;" => ['\u{2265}', '\u{20d2}'],
    "nvgt;" => ['>', '\u{20d2}'],
    "nvinfin;" => ['\u{29de}', '\0'],
    "nvlArr;" => ['\u{2902}', '\0'],
    "nvle;" => ['\u{2264}', '\u{20d2}'],
    "nvlt;" => ['<', '\u{20d2}'],
    "nvltrie;" => ['\u{22b4}', '\u{20d2}'],
    "nvrArr;" => ['\u{2903}', '\0'],
    "nvrtrie;" => ['\u{22b5}', '\u{20d2}'],
    "nvsim;" => ['\u{223c}', '\u{20d2}'],
    "nwArr;" => ['\u{21d6}', '\0'],
    "nwarhk;" => ['\u{2923}', '\0'],
    "nwarr;" => ['\u{2196}', '\0'],
    "nwarrow;" => ['\u{2196}', '\0'],
    "nwnear;" => ['\u{2927}', '\0'],
    "oS;" => ['\u{24c8}', '\0'],
    "oacute" => ['\u{f3}', '\0'],
    "oacute;" => ['\u{f3}', '\0'],
    "oast;" => ['\u{229b}', '\0'],
    "ocir;" => ['\u{229a}', '\0'],
    "ocirc" => ['\u{f4}', '\0'],
    "ocirc;" => ['\u{f4}', '\0'],
    "ocy;" => ['\u{43e}', '\0'],
    "odash;" => ['\u{229d}', '\0'],
    "odblac;" => ['\u{151}', '\0'],
    "odiv;" => ['\u{2a38}', '\0'],
    "odot;" => ['\u{2299}', '\0'],
    "odsold;" => ['\u{29bc}', '\0'],
    "oelig;" => ['\u{153}', '\0'],
    "ofcir;" => ['\u{29bf}', '\0'],
    "ofr;" => ['\u{1d52c}', '\0'],
    "ogon;" => ['\u{2db}', '\0'],
    "ograve" => ['\u{f2}', '\0'],
    "ograve;" => ['\u{f2}', '\0'],
    "ogt;" => ['\u{29c1}', '\0'],
    "ohbar;" => ['\u{29b5}', '\0'],
    "ohm;" => ['\u{3a9}', '\0'],
    "oint;" => ['\u{222e}', '\0'],
    "olarr;" => ['\u{21ba}', '\0'],
    "olcir;" => ['\u{29be}', '\0'],
    "olcross;" => ['\u{29bb}', '\0'],
    "oline;" => ['\u{203e}', '\0'],
    "olt;" => ['\u{29c0}', '\0'],
    "omacr;" => ['\u{14d}', '\0'],
    "omega;" => ['\u{3c9}', '\0'],
    "omicron;" => ['\u{3bf}', '\0'],
    "omid;" => ['\u{29b6}', '\0'],
    "ominus;" => ['\u{2296}', '\0'],
    "oopf;" => ['\u{1d560}', '\0'],
    "opar;" => ['\u{29b7}', '\0'],
    "operp;" => ['\u{29b9}', '\0'],
    "oplus;" => ['\u{2295}', '\0'],
    "or;" => ['\u{2228}', '\0'],
    "orarr;" => ['\u{21bb}', '\0'],
    "ord;" => ['\u{2a5d}', '\0'],
    "order;" => ['\u{2134}', '\0'],
    "orderof;" => ['\u{2134}', '\0'],
    "ordf" => ['\u{aa}', '\0'],
    "ordf;" => ['\u{aa}', '\0'],
    "ordm" => ['\u{ba}', '\0'],
    "ordm;" => ['\u{ba}', '\0'],
    "origof;" => ['\u{22b6}', '\0'],
    "oror;" => ['\u{2a56}', '\0'],
    "orslope;" => ['\u{2a57}', '\0'],
    "orv;" => ['\u{2a5b}', '\0'],
    "oscr;" => ['\u{2134}', '\0'],
    "oslash" => ['\u{f8}', '\0'],
    "oslash;" => ['\u{f8}', '\0'],
    "osol;" => ['\u{2298}', '\0'],
    "otilde" => ['\u{f5}', '\0'],
    "otilde;" => ['\u{f5}', '\0'],
    "otimes;" => ['\u{2297}', '\0'],
    "otimesas;" => ['\u{2a36}', '\0'],
    "ouml" => ['\u{f6}', '\0'],
    "ouml;" => ['\u{f6}', '\0'],
    "ovbar;" => ['\u{233d}', '\0'],
    "par;" => ['\u{2225}', '\0'],
    "para" => ['\u{b6}', '\0'],
    "para;" => ['\u{b6}', '\0'],
    "parallel;" => ['\u{2225}', '\0'],
    "parsim;" => ['\u{2af3}', '\0'],
    "parsl;" => ['\u{2afd}', '\0'],
    "part;" => ['\u{2202}', '\0'],
    "pcy;" => ['\u{43f}', '\0'],
    "percnt;" => ['%', '\0'],
    "period;" => ['.', '\0'],
    "permil;" => ['\u{2030}', '\0'],
    "perp;" => ['\u{22a5}', '\0'],
    "pertenk;" => ['\u{2031}', '\0'],
    "pfr;" => ['\u{1d52d}', '\0'],
    "phi;" => ['\u{3c6}', '\0'],
    "phiv;" => ['\u{3d5}', '\0'],
    "phmmat;" => ['\u{2133}', '\0'],
    "phone;" => ['\u{260e}', '\0'],
    "pi;" => ['\u{3c0}', '\0'],
    "pitchfork;" => ['\u{22d4}', '\0'],
    "piv;" => ['\u{3d6}', '\0'],
    "planck;" => ['\u{210f}', '\0'],
    "planckh;" => ['\u{210e}', '\0'],
    "plankv;" => ['\u{210f}', '\0'],
    "plus;" => ['+', '\0'],
    "plusacir;" => ['\u{2a23}', '\0'],
    "plusb;" => ['\u{229e}', '\0'],
    "pluscir;" => ['\u{2a22}', '\0'],
    "plusdo;" => ['\u{2214}', '\0'],
    "plusdu;" => ['\u{2a25}', '\0'],
    "pluse;" => ['\u{2a72}', '\0'],
    "plusmn" => ['\u{b1}', '\0'],
    "plusmn;" => ['\u{b1}', '\0'],
    "plussim;" => ['\u{2a26}', '\0'],
    "plustwo;" => ['\u{2a27}', '\0'],
    "pm;" => ['\u{b1}', '\0'],
    "pointint;" => ['\u{2a15}', '\0'],
    "popf;" => ['\u{1d561}', '\0'],
    "pound" => ['\u{a3}', '\0'],
    "pound;" => ['\u{a3}', '\0'],
    "pr;" => ['\u{227a}', '\0'],
    "prE;" => ['\u{2ab3}', '\0'],
    "prap;" => ['\u{2ab7}', '\0'],
    "prcue;" => ['\u{227c}', '\0'],
    "pre;" => ['\u{2aaf}', '\0'],
    "prec;" => ['\u{227a}', '\0'],
    "precapprox;" => ['\u{2ab7}', '\0'],
    "preccurlyeq;" => ['\u{227c}', '\0'],
    "preceq;" => ['\u{2aaf}', '\0'],
    "precnapprox;" => ['\u{2ab9}', '\0'],
    "precneqq;" => ['\u{2ab5}', '\0'],
    "precnsim;" => ['\u{22e8}', '\0'],
    "precsim;" => ['\u{227e}', '\0'],
    "prime;" => ['\u{2032}', '\0'],
    "primes;" => ['\u{2119}', '\0'],
    "prnE;" => ['\u{2ab5}', '\0'],
    "prnap;" => ['\u{2ab9}', '\0'],
    "prnsim;" => ['\u{22e8}', '\0'],
    "prod;" => ['\u{220f}', '\0'],
    "profalar;" => ['\u{232e}', '\0'],
    "profline;" => ['\u{2312}', '\0'],
    "profsurf;" => ['\u{2313}', '\0'],
    "prop;" => ['\u{221d}', '\0'],
    "propto;" => ['\u{221d}', '\0'],
    "prsim;" => ['\u{227e}', '\0'],
    "prurel;" => ['\u{22b0}', '\0'],
    "pscr;" => ['\u{1d4c5}', '\0'],
    "psi;" => ['\u{3c8}', '\0'],
    "puncsp;" => ['\u{2008}', '\0'],
    "qfr;" => ['\u{1d52e}', '\0'],
    "qint;" => ['\u{2a0c}', '\0'],
    "qopf;" => ['\u{1d562}', '\0'],
    "qprime;" => ['\u{2057}', '\0'],
    "qscr;" => ['\u{1d4c6}', '\0'],
    "quaternions;" => ['\u{210d}', '\0'],
    "quatint;" => ['\u{2a16}', '\0'],
    "quest;" => ['?', '\0'],
    "questeq;" => ['\u{225f}', '\0'],
    "quot" => ['"', '\0'],
    "quot;" => ['"', '\0'],
    "rAarr;" => ['\u{21db}', '\0'],
    "rArr;" => ['\u{21d2}', '\0'],
    "rAtail;" => ['\u{291c}', '\0'],
    "rBarr;" => ['\u{290f}', '\0'],
    "rHar;" => ['\u{2964}', '\0'],
    "race;" => ['\u{223d}', '\u{331}'],
    "racute;" => ['\u{155}', '\0'],
    "radic;" => ['\u{221a}', '\0'],
    "raemptyv;" => ['\u{29b3}', '\0'],
    "rang;" => ['\u{27e9}', '\0'],
    "rangd;" => ['\u{2992}', '\0'],
    "range;" => ['\u{29a5}', '\0'],
    "rangle;" => ['\u{27e9}', '\0'],
    "raquo" => ['\u{bb}', '\0'],
    "raquo;" => ['\u{bb}', '\0'],
    "rarr;" => ['\u{2192}', '\0'],
    "rarrap;" => ['\u{2975}', '\0'],
    "rarrb;" => ['\u{21e5}', '\0'],
    "rarrbfs;" => ['\u{2920}', '\0'],
    "rarrc;" => ['\u{2933}', '\0'],
    "rarrfs;" => ['\u{291e}', '\0'],
    "rarrhk;" => ['\u{21aa}', '\0'],
    "rarrlp;" => ['\u{21ac}', '\0'],
    "rarrpl;" => ['\u{2945}', '\0'],
    "rarrsim;" => ['\u{2974}', '\0'],
    "rarrtl;" => ['\u{21a3}', '\0'],
    "rarrw;" => ['\u{219d}', '\0'],
    "ratail;" => ['\u{291a}', '\0'],
    "ratio;" => ['\u{2236}', '\0'],
    "rationals;" => ['\u{211a}', '\0'],
    "rbarr;" => ['\u{290d}', '\0'],
    "rbbrk;" => ['\u{2773}', '\0'],
    "rbrace;" => ['}', '\0'],
    "rbrack;" => [']', '\0'],
    "rbrke;" => ['\u{298c}', '\0'],
    "rbrksld;" => ['\u{298e}', '\0'],
    "rbrkslu;" => ['\u{2990}', '\0'],
    "rcaron;" => ['\u{159}', '\0'],
    "rcedil;" => ['\u{157}', '\0'],
    "rceil;" => ['\u{2309}', '\0'],
    "rcub;" => ['}', '\0'],
    "rcy;" => ['\u{440}', '\0'],
    "rdca;" => ['\u{2937}', '\0'],
    "rdldhar;" => ['\u{2969}', '\0'],
    "rdquo;" => ['\u{201d}', '\0'],
    "rdquor;" => ['\u{201d}', '\0'],
    "rdsh;" => ['\u{21b3}', '\0'],
    "real;" => ['\u{211c}', '\0'],
    "realine;" => ['\u{211b}', '\0'],
    "realpart;" => ['\u{211c}', '\0'],
    "reals;" => ['\u{211d}', '\0'],
    "rect;" => ['\u{25ad}', '\0'],
    "reg" => ['\u{ae}', '\0'],
    "reg;" => ['\u{ae}', '\0'],
    "rfisht;" => ['\u{297d}', '\0'],
    "rfloor;" => ['\u{230b}', '\0'],
    "rfr;" => ['\u{1d52f}', '\0'],
    "rhard;" => ['\u{21c1}', '\0'],
    "rharu;" => ['\u{21c0}', '\0'],
    "rharul;" => ['\u{296c}', '\0'],
    "rho;" => ['\u{3c1}', '\0'],
    "rhov;" => ['\u{3f1}', '\0'],
    "rightarrow;" => ['\u{2192}', '\0'],
    "rightarrowtail;" => ['\u{21a3}', '\0'],
    "rightharpoondown;" => ['\u{21c1}', '\0'],
    "rightharpoonup;" => ['\u{21c0}', '\0'],
    "rightleftarrows;" => ['\u{21c4}', '\0'],
    "rightleftharpoons;" => ['\u{21cc}', '\0'],
    "rightrightarrows;" => ['\u{21c9}', '\0'],
    "rightsquigarrow;" => ['\u{219d}', '\0'],
    "rightthreetimes;" => ['\u{22cc}', '\0'],
    "ring;" => ['\u{2da}', '\0'],
    "risingdotseq;" => ['\u{2253}', '\0'],
    "rlarr;" => ['\u{21c4}', '\0'],
    "rlhar;" => ['\u{21cc}', '\0'],
    "rlm;" => ['\u{200f}', '\0'],
    "rmoust;" => ['\u{23b1}', '\0'],
    "rmoustache;" => ['\u{23b1}', '\0'],
    "rnmid;" => ['\u{2aee}', '\0'],
    "roang;" => ['\u{27ed}', '\0'],
    "roarr;" => ['\u{21fe}', '\0'],
    "robrk;" => ['\u{27e7}', '\0'],
    "ropar;" => ['\u{2986}', '\0'],
    "ropf;" => ['\u{1d563}', '\0'],
    "roplus;" => ['\u{2a2e}', '\0'],
    "rotimes;" => ['\u{2a35}', '\0'],
    "rpar;" => [')', '\0'],
    "rpargt;" => ['\u{2994}', '\0'],
    "rppolint;" => ['\u{2a12}', '\0'],
    "rrarr;" => ['\u{21c9}', '\0'],
    "rsaquo;" => ['\u{203a}', '\0'],
    "rscr;" => ['\u{1d4c7}', '\0'],
    "rsh;" => ['\u{21b1}', '\0'],
    "rsqb;" => [']', '\0'],
    "rsquo;" => ['\u{2019}', '\0'],
    "rsquor;" => ['\u{2019}', '\0'],
    "rthree;" => ['\u{22cc}', '\0'],
    "rtimes;" => ['\u{22ca}', '\0'],
    "rtri;" => ['\u{25b9}', '\0'],
    "rtrie;" => ['\u{22b5}', '\0'],
    "rtrif;" => ['\u{25b8}', '\0'],
    "rtriltri;" => ['\u{29ce}', '\0'],
    "ruluhar;" => ['\u{2968}', '\0'],
    "rx;" => ['\u{211e}', '\0'],
    "sacute;" => ['\u{15b}', '\0'],
    "sbquo;" => ['\u{201a}', '\0'],
    "sc;" => ['\u{227b}', '\0'],
    "scE;" => ['\u{2ab4}', '\0'],
    "scap;" => ['\u{2ab8}', '\0'],
    "scaron;" => ['\u{161}', '\0'],
    "sccue;" => ['\u{227d}', '\0'],
    "sce;" => ['\u{2ab0}', '\0'],
    "scedil;" => ['\u{15f}', '\0'],
    "scirc;" => ['\u{15d}', '\0'],
    "scnE;" => ['\u{2ab6}', '\0'],
    "scnap;" => ['\u{2aba}', '\0'],
    "scnsim;" => ['\u{22e9}', '\0'],
    "scpolint;" => ['\u{2a13}', '\0'],
    "scsim;" => ['\u{227f}', '\0'],
    "scy;" => ['\u{441}', '\0'],
    "sdot;" => ['\u{22c5}', '\0'],
    "sdotb;" => ['\u{22a1}', '\0'],
    "sdote;" => ['\u{2a66}', '\0'],
    "seArr;" => ['\u{21d8}', '\0'],
    "searhk;" => ['\u{2925}', '\0'],
    "searr;" => ['\u{2198}', '\0'],
    "searrow;" => ['\u{2198}', '\0'],
    "sect" => ['\u{a7}', '\0'],
    "sect;" => ['\u{a7}', '\0'],
    "semi;" => [';', '\0'],
    "seswar;" => ['\u{2929}', '\0'],
    "setminus;" => ['\u{2216}', '\0'],
    "setmn;" => ['\u{2216}', '\0'],
    "sext;" => ['\u{2736}', '\0'],
    "sfr;" => ['\u{1d530}', '\0'],
    "sfrown;" => ['\u{2322}', '\0'],
    "sharp;" => ['\u{266f}', '\0'],
    "shchcy;" => ['\u{449}', '\0'],
    "shcy;" => ['\u{448}', '\0'],
    "shortmid;" => ['\u{2223}', '\0'],
    "shortparallel;" => ['\u{2225}', '\0'],
    "shy" => ['\u{ad}', '\0'],
    "shy;" => ['\u{ad}', '\0'],
    "sigma;" => ['\u{3c3}', '\0'],
    "sigmaf;" => ['\u{3c2}', '\0'],
    "sigmav;" => ['\u{3c2}', '\0'],
    "sim;" => ['\u{223c}', '\0'],
    "simdot;" => ['\u{2a6a}', '\0'],
    "sime;" => ['\u{2243}', '\0'],
    "simeq;" => ['\u{2243}', '\0'],
    "simg;" => ['\u{2a9e}', '\0'],
    "simgE;" => ['\u{2aa0}', '\0'],
    "siml;" => ['\u{2a9d}', '\0'],
    "simlE;" => ['\u{2a9f}', '\0'],
    "simne;" => ['\u{2246}', '\0'],
    "simplus;" => ['\u{2a24}', '\0'],
    "simrarr;" => ['\u{2972}', '\0'],
    "slarr;" => ['\u{2190}', '\0'],
    "smallsetminus;" => ['\u{2216}', '\0'],
    "smashp;" => ['\u{2a33}', '\0'],
    "smeparsl;" => ['\u{29e4}', '\0'],
    "smid;" => ['\u{2223}', '\0'],
    "smile;" => ['\u{2323}', '\0'],
    "smt;" => ['\u{2aaa}', '\0'],
    "smte;" => ['\u{2aac}', '\0'],
    "smtes;" => ['\u{2aac}', '\u{fe00}'],
    "softcy;" => ['\u{44c}', '\0'],
    "sol;" => ['/', '\0'],
    "solb;" => ['\u{29c4}', '\0'],
    "solbar;" => ['\u{233f}', '\0'],
    "sopf;" => ['\u{1d564}', '\0'],
    "spades;" => ['\u{2660}', '\0'],
    "spadesuit;" => ['\u{2660}', '\0'],
    "spar;" => ['\u{2225}', '\0'],
    "sqcap;" => ['\u{2293}', '\0'],
    "sqcaps;" => ['\u{2293}', '\u{fe00}'],
    "sqcup;" => ['\u{2294}', '\0'],
    "sqcups;" => ['\u{2294}', '\u{fe00}'],
    "sqsub;" => ['\u{228f}', '\0'],
    "sqsube;" => ['\u{2291}', '\0'],
    "sqsubset;" => ['\u{228f}', '\0'],
    "sqsubseteq;" => ['\u{2291}', '\0'],
    "sqsup;" => ['\u{2290}', '\0'],
    "sqsupe;" => ['\u{2292}', '\0'],
    "sqsupset;" => ['\u{2290}', '\0'],
    "sqsupseteq;" => ['\u{2292}', '\0'],
    "squ;" => ['\u{25a1}', '\0'],
    "square;" => ['\u{25a1}', '\0'],
    "squarf;" => ['\u{25aa}', '\0'],
    "squf;" => ['\u{25aa}', '\0'],
    "srarr;" => ['\u{2192}', '\0'],
    "sscr;" => ['\u{1d4c8}', '\0'],
    "ssetmn;" => ['\u{2216}', '\0'],
    "ssmile;" => ['\u{2323}', '\0'],
    "sstarf;" => ['\u{22c6}', '\0'],
    "star;" => ['\u{2606}', '\0'],
    "starf;" => ['\u{2605}', '\0'],
    "straightepsilon;" => ['\u{3f5}', '\0'],
    "straightphi;" => ['\u{3d5}', '\0'],
    "strns;" => ['\u{af}', '\0'],
    "sub;" => ['\u{2282}', '\0'],
    "subE;" => ['\u{2ac5}', '\0'],
    "subdot;" => ['\u{2abd}', '\0'],
    "sube;" => ['\u{2286}', '\0'],
    "subedot;" => ['\u{2ac3}', '\0'],
    "submult;" => ['\u{2ac1}', '\0'],
    "subnE;" => ['\u{2acb}', '\0'],
    "subne;" => ['\u{228a}', '\0'],
    "subplus;" => ['\u{2abf}', '\0'],
    "subrarr;" => ['\u{2979}', '\0'],
    "subset;" => ['\u{2282}', '\0'],
    "subseteq;" => ['\u{2286}', '\0'],
    "subseteqq;" => ['\u{2ac5}', '\0'],
    "subsetneq;" => ['\u{228a}', '\0'],
    "subsetneqq;" => ['\u{2acb}', '\0'],
    "subsim;" => ['\u{2ac7}', '\0'],
    "subsub;" => ['\u{2ad5}', '\0'],
    "subsup;" => ['\u{2ad3}', '\0'],
    "succ;" => ['\u{227b}', '\0'],
    "succapprox;" => ['\u{2ab8}', '\0'],
    "succcurlyeq;" => ['\u{227d}', '\0'],
    "succeq;" => ['\u{2ab0}', '\0'],
    "succnapprox;" => ['\u{2aba}', '\0'],
    "succneqq;" => ['\u{2ab6}', '\0'],
    "succnsim;" => ['\u{22e9}', '\0'],
    "succsim;" => ['\u{227f}', '\0'],
    "sum;" => ['\u{2211}', '\0'],
    "sung;" => ['\u{266a}', '\0'],
    "sup1" => ['\u{b9}', '\0'],
    "sup1;" => ['\u{b9}', '\0'],
    "sup2" => ['\u{b2}', '\0'],
    "sup2;" => ['\u{b2}', '\0'],
    "sup3" => ['\u{b3}', '\0'],
    "sup3;" => ['\u{b3}', '\0'],
    "sup;" => ['\u{2283}', '\0'],
    "supE;" => ['\u{2ac6}', '\0'],
    "supdot;" => ['\u{2abe}', '\0'],
    "supdsub;" => ['\u{2ad8}', '\0'],
    "supe;" => ['\u{2287}', '\0'],
    "supedot;" => ['\u{2ac4}', '\0'],
    "suphsol;" => ['\u{27c9}', '\0'],
    "suphsub;" => ['\u{2ad7}', '\0'],
    "suplarr;" => ['\u{297b}', '\0'],
    "supmult;" => ['\u{2ac2}', '\0'],
    "supnE;" => ['\u{2acc}', '\0'],
    "supne;" => ['\u{228b}', '\0'],
    "supplus;" => ['\u{2ac0}', '\0'],
    "supset;" => ['\u{2283}', '\0'],
    "supseteq;" => ['\u{2287}', '\0'],
    "supseteqq;" => ['\u{2ac6}', '\0'],
    "supsetneq;" => ['\u{228b}', '\0'],
    "supsetneqq;" => ['\u{2acc}', '\0'],
    "supsim;" => ['\u{2ac8}', '\0'],
    "supsub;" => ['\u{2ad4}', '\0'],
    "supsup;" => ['\u{2ad6}', '\0'],
    "swArr;" => ['\u{21d9}', '\0'],
    "swarhk;" => ['\u{2926}', '\0'],
    "swarr;" => ['\u{2199}', '\0'],
    "swarrow;" => ['\u{2199}', '\0'],
    "swnwar;" => ['\u{292a}', '\0'],
    "szlig" => ['\u{df}', '\0'],
    "szlig;" => ['\u{df}', '\0'],
    "target;" => ['\u{2316}', '\0'],
    "tau;" => ['\u{3c4}', '\0'],
    "tbrk;" => ['\u{23b4}', '\0'],
    "tcaron;" => ['\u{165}', '\0'],
    "tcedil;" => ['\u{163}', '\0'],
    "tcy;" => ['\u{442}', '\0'],
    "tdot;" => ['\u{20db}', '\0'],
    "telrec;" => ['\u{2315}', '\0'],
    "tfr;" => ['\u{1d531}', '\0'],
    "there4;" => ['\u{2234}', '\0'],
    "therefore;" => ['\u{2234}', '\0'],
    "theta;" => ['\u{3b8}', '\0'],
    "thetasym;" => ['\u{3d1}', '\0'],
    "thetav;" => ['\u{3d1}', '\0'],
    "thickapprox;" => ['\u{2248}', '\0'],
    "thicksim;" => ['\u{223c}', '\0'],
    "thinsp;" => ['\u{2009}', '\0'],
    "thkap;" => ['\u{2248}', '\0'],
    "thksim;" => ['\u{223c}', '\0'],
    "thorn" => ['\u{fe}', '\0'],
    "thorn;" => ['\u{fe}', '\0'],
    "tilde;" => ['\u{2dc}', '\0'],
    "times" => ['\u{d7}', '\0'],
    "times;" => ['\u{d7}', '\0'],
    "timesb;" => ['\u{22a0}', '\0'],
    "timesbar;" => ['\u{2a31}', '\0'],
    "timesd;" => ['\u{2a30}', '\0'],
    "tint;" => ['\u{222d}', '\0'],
    "toea;" => ['\u{2928}', '\0'],
    "top;" => ['\u{22a4}', '\0'],
    "topbot;" => ['\u{2336}', '\0'],
    "topcir;" => ['\u{2af1}', '\0'],
    "topf;" => ['\u{1d565}', '\0'],
    "topfork;" => ['\u{2ada}', '\0'],
    "tosa;" => ['\u{2929}', '\0'],
    "tprime;" => ['\u{2034}', '\0'],
    "trade;" => ['\u{2122}', '\0'],
    "triangle;" => ['\u{25b5}', '\0'],
    "triangledown;" => ['\u{25bf}', '\0'],
    "triangleleft;" => ['\u{25c3}', '\0'],
    "trianglelefteq;" => ['\u{22b4}', '\0'],
    "triangleq;" => ['\u{225c}', '\0'],
    "triangleright;" => ['\u{25b9}', '\0'],
    "trianglerighteq;" => ['\u{22b5}', '\0'],
    "tridot;" => ['\u{25ec}', '\0'],
    "trie;" => ['\u{225c}', '\0'],
    "triminus;" => ['\u{2a3a}', '\0'],
    "triplus;" => ['\u{2a39}', '\0'],
    "trisb;" => ['\u{29cd}', '\0'],
    "tritime;" => ['\u{2a3b}', '\0'],
    "trpezium;" => ['\u{23e2}', '\0'],
    "tscr;" => ['\u{1d4c9}', '\0'],
    "tscy;" => ['\u{446}', '\0'],
    "tshcy;" => ['\u{45b}', '\0'],
    "tstrok;" => ['\u{167}', '\0'],
    "twixt;" => ['\u{226c}', '\0'],
    "twoheadleftarrow;" => ['\u{219e}', '\0'],
    "twoheadrightarrow;" => ['\u{21a0}', '\0'],
    "uArr;" => ['\u{21d1}', '\0'],
    "uHar;" => ['\u{2963}', '\0'],
    "uacute" => ['\u{fa}', '\0'],
    "uacute;" => ['\u{fa}', '\0'],
    "uarr;" => ['\u{2191}', '\0'],
    "ubrcy;" => ['\u{45e}', '\0'],
    "ubreve;" => ['\u{16d}', '\0'],
    "ucirc" => ['\u{fb}', '\0'],
    "ucirc;" => ['\u{fb}', '\0'],
    "ucy;" => ['\u{443}', '\0'],
    "udarr;" => ['\u{21c5}', '\0'],
    "udblac;" => ['\u{171}', '\0'],
    "udhar;" => ['\u{296e}', '\0'],
    "ufisht;" => ['\u{297e}', '\0'],
    "ufr;" => ['\u{1d532}', '\0'],
    "ugrave" => ['\u{f9}', '\0'],
    "ugrave;" => ['\u{f9}', '\0'],
    "uharl;" => ['\u{21bf}', '\0'],
    "uharr;" => ['\u{21be}', '\0'],
    "uhblk;" => ['\u{2580}', '\0'],
    "ulcorn;" => ['\u{231c}', '\0'],
    "ulcorner;" => ['\u{231c}', '\0'],
    "ulcrop;" => ['\u{230f}', '\0'],
    "ultri;" => ['\u{25f8}', '\0'],
    "umacr;" => ['\u{16b}', '\0'],
    "uml" => ['\u{a8}', '\0'],
    "uml;" => ['\u{a8}', '\0'],
    "uogon;" => ['\u{173}', '\0'],
    "uopf;" => ['\u{1d566}', '\0'],
    "uparrow;" => ['\u{2191}', '\0'],
    "updownarrow;" => ['\u{2195}', '\0'],
    "upharpoonleft;" => ['\u{21bf}', '\0'],
    "upharpoonright;" => ['\u{21be}', '\0'],
    "uplus;" => ['\u{228e}', '\0'],
    "upsi;" => ['\u{3c5}', '\0'],
    "upsih;" => ['\u{3d2}', '\0'],
    "upsilon;" => ['\u{3c5}', '\0'],
    "upuparrows;" => ['\u{21c8}', '\0'],
    "urcorn;" => ['\u{231d}', '\0'],
    "urcorner;" => ['\u{231d}', '\0'],
    "urcrop;" => ['\u{230e}', '\0'],
    "uring;" => ['\u{16f}', '\0'],
    "urtri;" => ['\u{25f9}', '\0'],
    "uscr;" => ['\u{1d4ca}', '\0'],
    "utdot;" => ['\u{22f0}', '\0'],
    "utilde;" => ['\u{169}', '\0'],
    "utri;" => ['\u{25b5}', '\0'],
    "utrif;" => ['\u{25b4}', '\0'],
    "uuarr;" => ['\u{21c8}', '\0'],
    "uuml" => ['\u{fc}', '\0'],
    "uuml;" => ['\u{fc}', '\0'],
    "uwangle;" => ['\u{29a7}', '\0'],
    "vArr;" => ['\u{21d5}', '\0'],
    "vBar;" => ['\u{2ae8}', '\0'],
    "vBarv;" => ['\u{2ae9}', '\0'],
    "vDash;" => ['\u{22a8}', '\0'],
    "vangrt;" => ['\u{299c}', '\0'],
    "varepsilon;" => ['\u{3f5}', '\0'],
    "varkappa;" => ['\u{3f0}', '\0'],
    "varnothing;" => ['\u{2205}', '\0'],
    "varphi;" => ['\u{3d5}', '\0'],
    "varpi;" => ['\u{3d6}', '\0'],
    "varpropto;" => ['\u{221d}', '\0'],
    "varr;" => ['\u{2195}', '\0'],
    "varrho;" => ['\u{3f1}', '\0'],
    "varsigma;" => ['\u{3c2}', '\0'],
    "varsubsetneq;" => ['\u{228a}', '\u{fe00}'],
    "varsubsetneqq;" => ['\u{2acb}', '\u{fe00}'],
    "varsupsetneq;" => ['\u{228b}', '\u{fe00}'],
    "varsupsetneqq;" => ['\u{2acc}', '\u{fe00}'],
    "vartheta;" => ['\u{3d1}', '\0'],
    "vartriangleleft;" => ['\u{22b2}', '\0'],
    "vartriangleright;" => ['\u{22b3}', '\0'],
    "vcy;" => ['\u{432}', '\0'],
    "vdash;" => ['\u{22a2}', '\0'],
    "vee;" => ['\u{2228}', '\0'],
    "veebar;" => ['\u{22bb}', '\0'],
    "veeeq;" => ['\u{225a}', '\0'],
    "vellip;" => ['\u{22ee}', '\0'],
    "verbar;" => ['|', '\0'],
    "vert;" => ['|', '\0'],
    "vfr;" => ['\u{1d533}', '\0'],
    "vltri;" => ['\u{22b2}', '\0'],
    "vnsub;" => ['\u{2282}', '\u{20d2}'],
    "vnsup;" => ['\u{2283}', '\u{20d2}'],
    "vopf;" => ['\u{1d567}', '\0'],
    "vprop;" => ['\u{221d}', '\0'],
    "vrtri;" => ['\u{22b3}', '\0'],
    "vscr;" => ['\u{1d4cb}', '\0'],
    "vsubnE;" => ['\u{2acb}', '\u{fe00}'],
    "vsubne;" => ['\u{228a}', '\u{fe00}'],
    "vsupnE;" => ['\u{2acc}', '\u{fe00}'],
    "vsupne;" => ['\u{228b}', '\u{fe00}'],
    "vzigzag;" => ['\u{299a}', '\0'],
    "wcirc;" => ['\u{175}', '\0'],
    "wedbar;" => ['\u{2a5f}', '\0'],
    "wedge;" => ['\u{2227}', '\0'],
    "wedgeq;" => ['\u{2259}', '\0'],
    "weierp;" => ['\u{2118}', '\0'],
    "wfr;" => ['\u{1d534}', '\0'],
    "wopf;" => ['\u{1d568}', '\0'],
    "wp;" => ['\u{2118}', '\0'],
    "wr;" => ['\u{2240}', '\0'],
    "wreath;" => ['\u{2240}', '\0'],
    "wscr;" => ['\u{1d4cc}', '\0'],
    "xcap;" => ['\u{22c2}', '\0'],
    "xcirc;" => ['\u{25ef}', '\0'],
    "xcup;" => ['\u{22c3}', '\0'],
    "xdtri;" => ['\u{25bd}', '\0'],
    "xfr;" => ['\u{1d535}', '\0'],
    "xhArr;" => ['\u{27fa}', '\0'],
    "xharr;" => ['\u{27f7}', '\0'],
    "xi;" => ['\u{3be}', '\0'],
    "xlArr;" => ['\u{27f8}', '\0'],
    "xlarr;" => ['\u{27f5}', '\0'],
    "xmap;" => ['\u{27fc}', '\0'],
    "xnis;" => ['\u{22fb}', '\0'],
    "xodot;" => ['\u{2a00}', '\0'],
    "xopf;" => ['\u{1d569}', '\0'],
    "xoplus;" => ['\u{2a01}', '\0'],
    "xotime;" => ['\u{2a02}', '\0'],
    "xrArr;" => ['\u{27f9}', '\0'],
    "xrarr;" => ['\u{27f6}', '\0'],
    "xscr;" => ['\u{1d4cd}', '\0'],
    "xsqcup;" => ['\u{2a06}', '\0'],
    "xuplus;" => ['\u{2a04}', '\0'],
    "xutri;" => ['\u{25b3}', '\0'],
    "xvee;" => ['\u{22c1}', '\0'],
    "xwedge;" => ['\u{22c0}', '\0'],
    "yacute" => ['\u{fd}', '\0'],
    "yacute;" => ['\u{fd}', '\0'],
    "yacy;" => ['\u{44f}', '\0'],
    "ycirc;" => ['\u{177}', '\0'],
    "ycy;" => ['\u{44b}', '\0'],
    "yen" => ['\u{a5}', '\0'],
    "yen;" => ['\u{a5}', '\0'],
    "yfr;" => ['\u{1d536}', '\0'],
    "yicy;" => ['\u{457}', '\0'],
    "yopf;" => ['\u{1d56a}', '\0'],
    "yscr;" => ['\u{1d4ce}', '\0'],
    "yucy;" => ['\u{44e}', '\0'],
    "yuml" => ['\u{ff}', '\0'],
    "yuml;" => ['\u{ff}', '\0'],
    "zacute;" => ['\u{17a}', '\0'],
    "zcaron;" => ['\u{17e}', '\0'],
    "zcy;" => ['\u{437}', '\0'],
    "zdot;" => ['\u{17c}', '\0'],
    "zeetrf;" => ['\u{2128}', '\0'],
    "zeta;" => ['\u{3b6}', '\0'],
    "zfr;" => ['\u{1d537}', '\0'],
    "zhcy;" => ['\u{436}', '\0'],
    "zigrarr;" => ['\u{21dd}', '\0'],
    "zopf;" => ['\u{1d56b}', '\0'],
    "zscr;" => ['\u{1d4cf}', '\0'],
    "zwj;" => ['\u{200d}', '\0'],
    "zwnj;" => ['\u{200c}', '\0'],
};
