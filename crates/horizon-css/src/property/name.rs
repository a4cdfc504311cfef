//! The table of known CSS property names.

use crate::names::css_name_enum;
use crate::version::CssVersion;

css_name_enum! {
    /// A known, vendor independent CSS property.
    pub enum Property {
        AlignContent => "align-content",
        AlignItems => "align-items",
        AlignSelf => "align-self",
        AlignmentBaseline => "alignment-baseline",
        All => "all",
        Animation => "animation",
        AnimationDelay => "animation-delay",
        AnimationDirection => "animation-direction",
        AnimationDuration => "animation-duration",
        AnimationFillMode => "animation-fill-mode",
        AnimationIterationCount => "animation-iteration-count",
        AnimationName => "animation-name",
        AnimationPlayState => "animation-play-state",
        AnimationTimingFunction => "animation-timing-function",
        Azimuth => "azimuth",
        BackfaceVisibility => "backface-visibility",
        Background => "background",
        BackgroundAttachment => "background-attachment",
        BackgroundBlendMode => "background-blend-mode",
        BackgroundClip => "background-clip",
        BackgroundColor => "background-color",
        BackgroundImage => "background-image",
        BackgroundOrigin => "background-origin",
        BackgroundPosition => "background-position",
        BackgroundRepeat => "background-repeat",
        BackgroundSize => "background-size",
        BaselineShift => "baseline-shift",
        BookmarkLabel => "bookmark-label",
        BookmarkLevel => "bookmark-level",
        BookmarkState => "bookmark-state",
        Border => "border",
        BorderBottom => "border-bottom",
        BorderBottomColor => "border-bottom-color",
        BorderBottomLeftRadius => "border-bottom-left-radius",
        BorderBottomRightRadius => "border-bottom-right-radius",
        BorderBottomStyle => "border-bottom-style",
        BorderBottomWidth => "border-bottom-width",
        BorderCollapse => "border-collapse",
        BorderColor => "border-color",
        BorderImage => "border-image",
        BorderImageOutset => "border-image-outset",
        BorderImageRepeat => "border-image-repeat",
        BorderImageSlice => "border-image-slice",
        BorderImageSource => "border-image-source",
        BorderImageWidth => "border-image-width",
        BorderLeft => "border-left",
        BorderLeftColor => "border-left-color",
        BorderLeftStyle => "border-left-style",
        BorderLeftWidth => "border-left-width",
        BorderRadius => "border-radius",
        BorderRight => "border-right",
        BorderRightColor => "border-right-color",
        BorderRightStyle => "border-right-style",
        BorderRightWidth => "border-right-width",
        BorderSpacing => "border-spacing",
        BorderStyle => "border-style",
        BorderTop => "border-top",
        BorderTopColor => "border-top-color",
        BorderTopLeftRadius => "border-top-left-radius",
        BorderTopRightRadius => "border-top-right-radius",
        BorderTopStyle => "border-top-style",
        BorderTopWidth => "border-top-width",
        BorderWidth => "border-width",
        Bottom => "bottom",
        BoxDecorationBreak => "box-decoration-break",
        BoxShadow => "box-shadow",
        BoxSizing => "box-sizing",
        BoxSnap => "box-snap",
        BoxSuppress => "box-suppress",
        BreakAfter => "break-after",
        BreakBefore => "break-before",
        BreakInside => "break-inside",
        CaptionSide => "caption-side",
        CaretColor => "caret-color",
        Chains => "chains",
        Clear => "clear",
        Clip => "clip",
        ClipPath => "clip-path",
        ClipRule => "clip-rule",
        Color => "color",
        ColorInterpolationFilters => "color-interpolation-filters",
        Columns => "columns",
        ColumnsSpan => "columns-span",
        ColumnsWidth => "columns-width",
        ColumnCount => "column-count",
        ColumnFill => "column-fill",
        ColumnGap => "column-gap",
        ColumnRule => "column-rule",
        ColumnRuleColor => "column-rule-color",
        ColumnRuleStyle => "column-rule-style",
        ColumnRuleWidth => "column-rule-width",
        ColumnWidth => "column-width",
        Contain => "contain",
        Content => "content",
        CounterIncrement => "counter-increment",
        CounterReset => "counter-reset",
        CounterSet => "counter-set",
        Cue => "cue",
        CueAfter => "cue-after",
        CueBefore => "cue-before",
        Cursor => "cursor",
        Direction => "direction",
        Display => "display",
        DisplayInside => "display-inside",
        DisplayList => "display-list",
        DisplayOutside => "display-outside",
        DominantBaseline => "dominant-baseline",
        DropInitialAfterAdjust => "drop-initial-after-adjust",
        DropInitialAfterAlign => "drop-initial-after-align",
        DropInitialBeforeAdjust => "drop-initial-before-adjust",
        DropInitialBeforeAlign => "drop-initial-before-align",
        DropInitialSize => "drop-initial-size",
        DropInitialValue => "drop-initial-value",
        Elevation => "elevation",
        EmptyCells => "empty-cells",
        Filter => "filter",
        Flex => "flex",
        FlexBasis => "flex-basis",
        FlexDirection => "flex-direction",
        FlexFlow => "flex-flow",
        FlexGrow => "flex-grow",
        FlexShrink => "flex-shrink",
        FlexWrap => "flex-wrap",
        Float => "float",
        FloodColor => "flood-color",
        FloodOpactiy => "flood-opactiy",
        FlowFrom => "flow-from",
        FlowInto => "flow-into",
        Font => "font",
        FontFamily => "font-family",
        FontFeatureSettings => "font-feature-settings",
        FontKerning => "font-kerning",
        FontLanguageOverride => "font-language-override",
        FontSize => "font-size",
        FontSizeAdjust => "font-size-adjust",
        FontStretch => "font-stretch",
        FontStyle => "font-style",
        FontSynthesis => "font-synthesis",
        FontVariant => "font-variant",
        FontVariantAlternates => "font-variant-alternates",
        FontVariantCaps => "font-variant-caps",
        FontVariantEastAsian => "font-variant-east-asian",
        FontVariantLigatures => "font-variant-ligatures",
        FontVariantNumeric => "font-variant-numeric",
        FontVariantPosition => "font-variant-position",
        FontWeight => "font-weight",
        FootnoteDisplay => "footnote-display",
        FootnotePolicy => "footnote-policy",
        GlyphOrientationVertical => "glyph-orientation-vertical",
        Grid => "grid",
        GridArea => "grid-area",
        GridAutoColumns => "grid-auto-columns",
        GridAutoFlow => "grid-auto-flow",
        GridAutoRows => "grid-auto-rows",
        GridColumn => "grid-column",
        GridColumnEnd => "grid-column-end",
        GridColumnStart => "grid-column-start",
        GridRow => "grid-row",
        GridRowEnd => "grid-row-end",
        GridRowStart => "grid-row-start",
        GridTemplate => "grid-template",
        GridTemplateAreas => "grid-template-areas",
        GridTemplateColumns => "grid-template-columns",
        GridTemplateRows => "grid-template-rows",
        HangingPunctuation => "hanging-punctuation",
        Height => "height",
        Hyphens => "hyphens",
        Icon => "icon",
        ImageOrientation => "image-orientation",
        ImageResolution => "image-resolution",
        ImeMode => "ime-mode",
        InlineBoxAlign => "inline-box-align",
        Isolation => "isolation",
        JustifyContent => "justify-content",
        JustifyItems => "justify-items",
        JustifySelf => "justify-self",
        Left => "left",
        LetterSpacing => "letter-spacing",
        LightingColor => "lighting-color",
        LineBreak => "line-break",
        LineGrid => "line-grid",
        LineHeight => "line-height",
        LineSnap => "line-snap",
        LineStacking => "line-stacking",
        LineStackingRuby => "line-stacking-ruby",
        LineStackingShift => "line-stacking-shift",
        LineStackingStrategy => "line-stacking-strategy",
        ListStyle => "list-style",
        ListStyleImage => "list-style-image",
        ListStylePosition => "list-style-position",
        ListStyleType => "list-style-type",
        Margin => "margin",
        MarginBottom => "margin-bottom",
        MarginLeft => "margin-left",
        MarginRight => "margin-right",
        MarginTop => "margin-top",
        MarkerSide => "marker-side",
        Mask => "mask",
        MaskBorder => "mask-border",
        MaskBorderMode => "mask-border-mode",
        MaskBorderRepeat => "mask-border-repeat",
        MaskBorderSlice => "mask-border-slice",
        MaskBorderSource => "mask-border-source",
        MaskBorderWidth => "mask-border-width",
        MaskClip => "mask-clip",
        MaskComposite => "mask-composite",
        MaskImage => "mask-image",
        MaskMode => "mask-mode",
        MaskOrigin => "mask-origin",
        MaskPosition => "mask-position",
        MaskRepeat => "mask-repeat",
        MaskSize => "mask-size",
        MaskType => "mask-type",
        MaxHeight => "max-height",
        MaxLines => "max-lines",
        MaxWidth => "max-width",
        MaxZoom => "max-zoom",
        MinHeight => "min-height",
        MinWidth => "min-width",
        MinZoom => "min-zoom",
        MixBlendMode => "mix-blend-mode",
        NavDown => "nav-down",
        NavIndex => "nav-index",
        NavLeft => "nav-left",
        NavRight => "nav-right",
        NavUp => "nav-up",
        ObjectFit => "object-fit",
        ObjectPosition => "object-position",
        Opacity => "opacity",
        Order => "order",
        Orientation => "orientation",
        Orphans => "orphans",
        Outline => "outline",
        OutlineColor => "outline-color",
        OutlineOffset => "outline-offset",
        OutlineStyle => "outline-style",
        OutlineWidth => "outline-width",
        Overflow => "overflow",
        OverflowWrap => "overflow-wrap",
        OverflowX => "overflow-x",
        OverflowY => "overflow-y",
        Padding => "padding",
        PaddingBottom => "padding-bottom",
        PaddingLeft => "padding-left",
        PaddingRight => "padding-right",
        PaddingTop => "padding-top",
        PageBreakAfter => "page-break-after",
        PageBreakBefore => "page-break-before",
        PageBreakInside => "page-break-inside",
        Pause => "pause",
        PauseAfter => "pause-after",
        PauseBefore => "pause-before",
        Perspective => "perspective",
        PerspectiveOrigin => "perspective-origin",
        Pitch => "pitch",
        PitchRange => "pitch-range",
        PlayDuring => "play-during",
        Position => "position",
        Quotes => "quotes",
        RegionFragment => "region-fragment",
        Resize => "resize",
        Resolution => "resolution",
        Rest => "rest",
        RestAfter => "rest-after",
        RestBefore => "rest-before",
        Richness => "richness",
        Right => "right",
        RubyAlign => "ruby-align",
        RubyMerge => "ruby-merge",
        RubyPosition => "ruby-position",
        Running => "running",
        ScrollBehavior => "scroll-behavior",
        ShapeOutside => "shape-outside",
        ShapeImageThreshold => "shape-image-threshold",
        ShapeMargin => "shape-margin",
        Size => "size",
        Speak => "speak",
        SpeakAs => "speak-as",
        SpeakHeader => "speak-header",
        SpeakNumeral => "speak-numeral",
        SpeakPunctuation => "speak-punctuation",
        SpeechRate => "speech-rate",
        Src => "src",
        Stress => "stress",
        StringSet => "string-set",
        TableLayout => "table-layout",
        TabSize => "tab-size",
        TextAlign => "text-align",
        TextAlignLast => "text-align-last",
        TextCombineUpright => "text-combine-upright",
        TextDecoration => "text-decoration",
        TextDecorationColor => "text-decoration-color",
        TextDecorationLine => "text-decoration-line",
        TextDecorationSkip => "text-decoration-skip",
        TextDecorationStyle => "text-decoration-style",
        TextEmphasis => "text-emphasis",
        TextEmphasisColor => "text-emphasis-color",
        TextEmphasisPosition => "text-emphasis-position",
        TextEmphasisStyle => "text-emphasis-style",
        TextHeight => "text-height",
        TextIndent => "text-indent",
        TextJustify => "text-justify",
        TextOrientation => "text-orientation",
        TextOverflow => "text-overflow",
        TextShadow => "text-shadow",
        TextTransform => "text-transform",
        TextUnderlinePosition => "text-underline-position",
        Top => "top",
        TouchAction => "touch-action",
        Transform => "transform",
        TransformOrigin => "transform-origin",
        TransformStyle => "transform-style",
        Transition => "transition",
        TransitionDelay => "transition-delay",
        TransitionDuration => "transition-duration",
        TransitionProperty => "transition-property",
        TransitionTimingFunction => "transition-timing-function",
        UnicodeBidi => "unicode-bidi",
        UnicodeRange => "unicode-range",
        UserZoom => "user-zoom",
        VerticalAlign => "vertical-align",
        Visibility => "visibility",
        VoiceBalance => "voice-balance",
        VoiceDuration => "voice-duration",
        VoiceFamily => "voice-family",
        VoicePitch => "voice-pitch",
        VoiceRange => "voice-range",
        VoiceRate => "voice-rate",
        VoiceStress => "voice-stress",
        VoiceVolume => "voice-volume",
        Volume => "volume",
        WhiteSpace => "white-space",
        Widows => "widows",
        Width => "width",
        WillChange => "will-change",
        WordBreak => "word-break",
        WordSpacing => "word-spacing",
        WordWrap => "word-wrap",
        WrapFlow => "wrap-flow",
        WrapThrough => "wrap-through",
        WritingMode => "writing-mode",
        Zoom => "zoom",
        ZIndex => "z-index",
    }
}

impl Property {
    /// The first CSS level that defined this property.
    pub const fn min_version(&self) -> CssVersion {
        match self {
            Property::Background
            | Property::BackgroundAttachment
            | Property::BackgroundColor
            | Property::BackgroundImage
            | Property::BackgroundPosition
            | Property::BackgroundRepeat
            | Property::Border
            | Property::BorderBottom
            | Property::BorderBottomWidth
            | Property::BorderColor
            | Property::BorderLeft
            | Property::BorderLeftWidth
            | Property::BorderRight
            | Property::BorderRightWidth
            | Property::BorderStyle
            | Property::BorderTop
            | Property::BorderTopWidth
            | Property::BorderWidth
            | Property::Clear
            | Property::Color
            | Property::Display
            | Property::Float
            | Property::Font
            | Property::FontFamily
            | Property::FontSize
            | Property::FontStyle
            | Property::FontVariant
            | Property::FontWeight
            | Property::Height
            | Property::LetterSpacing
            | Property::LineHeight
            | Property::ListStyle
            | Property::ListStyleImage
            | Property::ListStylePosition
            | Property::ListStyleType
            | Property::Margin
            | Property::MarginBottom
            | Property::MarginLeft
            | Property::MarginRight
            | Property::MarginTop
            | Property::Padding
            | Property::PaddingBottom
            | Property::PaddingLeft
            | Property::PaddingRight
            | Property::PaddingTop
            | Property::TextAlign
            | Property::TextDecoration
            | Property::TextIndent
            | Property::TextTransform
            | Property::VerticalAlign
            | Property::WhiteSpace
            | Property::Width
            | Property::WordSpacing => CssVersion::Css10,
            Property::Azimuth
            | Property::BorderBottomColor
            | Property::BorderBottomStyle
            | Property::BorderCollapse
            | Property::BorderLeftColor
            | Property::BorderLeftStyle
            | Property::BorderRightColor
            | Property::BorderRightStyle
            | Property::BorderSpacing
            | Property::BorderTopColor
            | Property::BorderTopStyle
            | Property::Bottom
            | Property::CaptionSide
            | Property::Clip
            | Property::Content
            | Property::CounterIncrement
            | Property::CounterReset
            | Property::Cue
            | Property::CueAfter
            | Property::CueBefore
            | Property::Cursor
            | Property::Direction
            | Property::Elevation
            | Property::EmptyCells
            | Property::Left
            | Property::MaxHeight
            | Property::MaxWidth
            | Property::MinHeight
            | Property::MinWidth
            | Property::Orphans
            | Property::Outline
            | Property::OutlineColor
            | Property::OutlineStyle
            | Property::OutlineWidth
            | Property::Overflow
            | Property::PageBreakAfter
            | Property::PageBreakBefore
            | Property::PageBreakInside
            | Property::Pause
            | Property::PauseAfter
            | Property::PauseBefore
            | Property::Pitch
            | Property::PitchRange
            | Property::PlayDuring
            | Property::Position
            | Property::Quotes
            | Property::Richness
            | Property::Right
            | Property::Speak
            | Property::SpeakHeader
            | Property::SpeakNumeral
            | Property::SpeakPunctuation
            | Property::SpeechRate
            | Property::Stress
            | Property::TableLayout
            | Property::Top
            | Property::UnicodeBidi
            | Property::Visibility
            | Property::VoiceFamily
            | Property::Volume
            | Property::Widows
            | Property::ZIndex => CssVersion::Css21,
            _ => CssVersion::Css30,
        }
    }

    /// Look up a property, ignoring a leading `*`, `_` or `$` browser hack.
    pub fn from_name_handling_hacks(name: &str) -> Option<Property> {
        Property::from_name(strip_hack_prefix(name))
    }
}

/// Strip one leading `*`, `_` or `$` from a property name.
pub fn strip_hack_prefix(name: &str) -> &str {
    name.strip_prefix(['*', '_', '$']).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(Property::from_name("color"), Some(Property::Color));
        assert_eq!(Property::from_name("Border-Radius"), Some(Property::BorderRadius));
        assert_eq!(Property::from_name("-moz-opacity"), None);
        assert_eq!(Property::from_name("no-such-property"), None);
        assert_eq!(Property::Opacity.name(), "opacity");
    }

    #[test]
    fn test_hacks() {
        assert_eq!(Property::from_name_handling_hacks("*zoom"), Some(Property::Zoom));
        assert_eq!(Property::from_name_handling_hacks("_height"), Some(Property::Height));
        assert_eq!(Property::from_name_handling_hacks("$color"), Some(Property::Color));
        assert_eq!(strip_hack_prefix("width"), "width");
    }

    #[test]
    fn test_min_version() {
        assert_eq!(Property::Color.min_version(), CssVersion::Css10);
        assert_eq!(Property::ZIndex.min_version(), CssVersion::Css21);
        assert_eq!(Property::BorderRadius.min_version(), CssVersion::Css30);
    }
}
