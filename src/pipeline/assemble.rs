use crate::color::Color;
use crate::pipeline::surfaces::{DerivedSurfaceColors, Surface};
use crate::pipeline::validate::{Palette, Slot};
use crate::theme::{ColorValue, HighlightRule, ThemeDocument};

use Slot::{Black, Blue, Cyan, Green, Magenta, Red, White, Yellow};
use Surface::{Border, Hover, Input, List, Panel, Side, Tab};

/// Where a document value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Background,
    Foreground,
    Cursor,
    Normal(Slot),
    Bright(Slot),
    Surface(Surface),
}

impl Source {
    fn resolve(self, palette: &Palette, surfaces: &DerivedSurfaceColors) -> Color {
        match self {
            Source::Background => palette.background,
            Source::Foreground => palette.foreground,
            Source::Cursor => palette.cursor,
            Source::Normal(slot) => palette.normal[slot],
            Source::Bright(slot) => palette.bright[slot],
            Source::Surface(surface) => surfaces.get(surface),
        }
    }
}

/// A row of the color map: a sourced color or a fixed literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Color(Source),
    Literal(&'static str),
}

const BG: Entry = Entry::Color(Source::Background);
const FG: Entry = Entry::Color(Source::Foreground);
const CURSOR: Entry = Entry::Color(Source::Cursor);

const fn normal(slot: Slot) -> Entry {
    Entry::Color(Source::Normal(slot))
}

const fn bright(slot: Slot) -> Entry {
    Entry::Color(Source::Bright(slot))
}

const fn surface(surface: Surface) -> Entry {
    Entry::Color(Source::Surface(surface))
}

const fn literal(value: &'static str) -> Entry {
    Entry::Literal(value)
}

/// Every UI element key of the generated theme, in output order.
pub const COLOR_MAP: &[(&str, Entry)] = &[
    // editor
    ("editor.background", BG),
    ("editor.foreground", FG),
    ("editor.emptyBackground", BG),
    ("editor.lineHighlightBackground", surface(List)),
    ("editor.selectionBackground", surface(Tab)),
    ("editor.findMatchBackground", normal(Green)),
    ("editor.findMatchHighlightBackground", surface(Hover)),
    ("editorCursor.foreground", CURSOR),
    ("editorWhitespace.foreground", normal(Black)),
    ("editorIndentGuide.background", surface(Border)),
    ("editorIndentGuide.activeBackground", normal(Green)),
    ("editor.lineHighlightBorder", surface(Border)),
    ("editor.rangeHighlightBackground", surface(Hover)),
    ("editor.symbolHighlightBackground", surface(Hover)),
    ("editor.wordHighlightBackground", surface(Hover)),
    ("editor.wordHighlightStrongBackground", surface(Tab)),
    ("editorBracketMatch.background", surface(Border)),
    ("editorBracketMatch.border", normal(Blue)),
    ("editorCodeLens.foreground", normal(Black)),
    ("editorError.foreground", normal(Red)),
    ("editorWarning.foreground", normal(Yellow)),
    ("editorInfo.foreground", normal(Blue)),
    ("editorHint.foreground", normal(Green)),
    ("editorGutter.background", BG),
    ("editorGutter.modifiedBackground", normal(Yellow)),
    ("editorGutter.addedBackground", normal(Green)),
    ("editorGutter.deletedBackground", normal(Red)),
    ("editorUnnecessaryCode.opacity", literal("0.4")),
    ("editorSuggestWidget.background", surface(Input)),
    ("editorSuggestWidget.border", surface(Border)),
    ("editorSuggestWidget.selectedBackground", surface(List)),
    ("editorSuggestWidget.highlightForeground", normal(Blue)),
    ("editorHoverWidget.background", surface(Input)),
    ("editorHoverWidget.border", surface(Border)),

    // editor group
    ("editorGroup.background", BG),
    ("editorGroup.border", surface(Border)),
    ("editorGroupHeader.background", surface(Side)),
    ("editorGroupHeader.tabsBackground", surface(Side)),
    ("editorGroupHeader.tabsBorder", surface(Border)),
    ("editorGroupHeader.noTabsBackground", surface(Side)),

    // breadcrumbs
    ("breadcrumb.background", BG),
    ("breadcrumb.foreground", FG),
    ("breadcrumb.focusForeground", normal(Blue)),
    ("breadcrumb.activeSelectionForeground", FG),
    ("breadcrumbPicker.background", surface(Input)),
    ("breadcrumbPicker.foreground", FG),

    // sidebar
    ("sideBar.background", surface(Side)),
    ("sideBar.foreground", FG),
    ("sideBarTitle.foreground", FG),
    ("sideBarSectionHeader.background", surface(Border)),
    ("sideBarSectionHeader.foreground", FG),

    // activity bar
    ("activityBar.background", surface(Side)),
    ("activityBar.foreground", FG),
    ("activityBar.activeBorder", normal(Blue)),
    ("activityBar.activeBackground", surface(Hover)),
    ("activityBar.inactiveForeground", normal(Black)),
    ("activityBarBadge.background", normal(Red)),
    ("activityBarBadge.foreground", BG),

    // status bar
    ("statusBar.background", surface(Side)),
    ("statusBar.foreground", FG),
    ("statusBar.debuggingBackground", normal(Red)),
    ("statusBar.debuggingForeground", FG),
    ("statusBar.noFolderBackground", surface(Side)),
    ("statusBar.noFolderForeground", FG),
    ("statusBarItem.prominentBackground", surface(Tab)),
    ("statusBarItem.prominentForeground", FG),
    ("statusBarItem.hoverBackground", surface(Hover)),
    ("statusBarItem.errorBackground", normal(Red)),
    ("statusBarItem.errorForeground", FG),
    ("statusBarItem.warningBackground", normal(Yellow)),
    ("statusBarItem.warningForeground", BG),

    // title bar
    ("titleBar.activeBackground", surface(Side)),
    ("titleBar.activeForeground", FG),
    ("titleBar.inactiveBackground", surface(Panel)),
    ("titleBar.inactiveForeground", normal(Black)),

    // tabs
    ("tab.activeBackground", surface(Tab)),
    ("tab.activeForeground", FG),
    ("tab.inactiveBackground", surface(Side)),
    ("tab.inactiveForeground", normal(Black)),
    ("tab.border", surface(Border)),
    ("tab.activeBorder", normal(Blue)),
    ("tab.hoverBackground", surface(Hover)),
    ("tab.hoverForeground", FG),
    ("tab.unfocusedActiveBackground", surface(Tab)),
    ("tab.unfocusedActiveForeground", normal(Black)),
    ("tab.unfocusedInactiveBackground", surface(Side)),
    ("tab.unfocusedInactiveForeground", normal(Black)),

    // panel
    ("panel.background", surface(Panel)),
    ("panel.foreground", FG),
    ("panel.border", surface(Border)),
    ("panelTitle.activeForeground", FG),
    ("panelTitle.inactiveForeground", normal(Black)),
    ("panelTitle.activeBorder", normal(Blue)),

    // terminal
    ("terminal.background", BG),
    ("terminal.foreground", FG),
    ("terminal.ansiBlack", normal(Black)),
    ("terminal.ansiRed", normal(Red)),
    ("terminal.ansiGreen", normal(Green)),
    ("terminal.ansiYellow", normal(Yellow)),
    ("terminal.ansiBlue", normal(Blue)),
    ("terminal.ansiMagenta", normal(Magenta)),
    ("terminal.ansiCyan", normal(Cyan)),
    ("terminal.ansiWhite", normal(White)),
    ("terminal.ansiBrightBlack", bright(Black)),
    ("terminal.ansiBrightRed", bright(Red)),
    ("terminal.ansiBrightGreen", bright(Green)),
    ("terminal.ansiBrightYellow", bright(Yellow)),
    ("terminal.ansiBrightBlue", bright(Blue)),
    ("terminal.ansiBrightMagenta", bright(Magenta)),
    ("terminal.ansiBrightCyan", bright(Cyan)),
    ("terminal.ansiBrightWhite", bright(White)),
    ("terminal.border", surface(Border)),
    ("terminalCursor.background", CURSOR),
    ("terminalCursor.foreground", BG),

    // input
    ("input.background", surface(Input)),
    ("input.foreground", FG),
    ("input.border", surface(Border)),
    ("input.placeholderForeground", normal(Black)),
    ("inputOption.activeBorder", normal(Blue)),
    ("inputValidation.infoBackground", normal(Blue)),
    ("inputValidation.infoBorder", normal(Blue)),
    ("inputValidation.warningBackground", normal(Yellow)),
    ("inputValidation.warningBorder", normal(Yellow)),
    ("inputValidation.errorBackground", normal(Red)),
    ("inputValidation.errorBorder", normal(Red)),

    // dropdown
    ("dropdown.background", surface(Input)),
    ("dropdown.foreground", FG),
    ("dropdown.border", surface(Border)),
    ("dropdown.listBackground", surface(Input)),

    // lists
    ("list.activeSelectionBackground", surface(List)),
    ("list.activeSelectionForeground", FG),
    ("list.hoverBackground", surface(Hover)),
    ("list.hoverForeground", FG),
    ("list.focusBackground", surface(List)),
    ("list.focusForeground", FG),
    ("list.inactiveSelectionBackground", surface(List)),
    ("list.inactiveSelectionForeground", FG),
    ("list.inactiveFocusBackground", surface(List)),
    ("list.inactiveFocusForeground", FG),
    ("list.warningForeground", normal(Yellow)),
    ("list.errorForeground", normal(Red)),
    ("list.infoForeground", normal(Blue)),
    ("list.highlightForeground", normal(Blue)),
    ("list.deemphasizedForeground", normal(Black)),

    // ai components
    ("ai-prompt-bar.background", surface(Input)),
    ("ai-prompt-bar.foreground", FG),
    ("ai-prompt-bar.border", normal(Blue)),
    ("ai-prompt-bar.button.background", surface(List)),
    ("ai-prompt-bar.button.foreground", FG),
    ("ai-prompt-bar.button.hoverBackground", surface(Hover)),
    ("ai-prompt-bar.button.keep.background", normal(Green)),
    ("ai-prompt-bar.button.keep.foreground", BG),

    // chat interface
    ("chat.background", surface(Side)),
    ("chat.foreground", FG),
    ("chat.border", normal(Blue)),
    ("chat.requestBackground", surface(Input)),
    ("chat.responseBackground", surface(List)),

    // buttons
    ("button.background", surface(Input)),
    ("button.foreground", FG),
    ("button.hoverBackground", surface(Hover)),
    ("button.border", surface(Border)),
    ("button.secondaryBackground", surface(Panel)),
    ("button.secondaryForeground", FG),
    ("button.secondaryHoverBackground", surface(Hover)),
    ("button.prominentBackground", normal(Blue)),
    ("button.prominentForeground", BG),
    ("button.prominentHoverBackground", bright(Blue)),

    // scrollbars
    ("scrollbarSlider.background", surface(Border)),
    ("scrollbarSlider.hoverBackground", normal(Black)),
    ("scrollbarSlider.activeBackground", normal(Blue)),

    // focus and borders
    ("focusBorder", normal(Blue)),
    ("contrastBorder", surface(Border)),
    ("contrastActiveBorder", normal(Blue)),

    // additional ui elements
    ("foreground", FG),
    ("disabledForeground", normal(Black)),
    ("errorForeground", normal(Red)),
    ("descriptionForeground", normal(Black)),

    // widgets
    ("widget.background", surface(Input)),
    ("widget.foreground", FG),
    ("widget.border", surface(Border)),
    ("widget.shadow", literal("#00000040")),

    // editor widgets
    ("editorWidget.background", surface(Input)),
    ("editorWidget.foreground", FG),
    ("editorWidget.border", surface(Border)),
    ("editorWidget.resizeBorder", normal(Blue)),

    // input options
    ("inputOption.activeBackground", normal(Blue)),
    ("inputOption.activeForeground", BG),
    ("inputOption.hoverBackground", surface(Hover)),

    // selection
    ("selection.background", normal(Blue)),

    // editor line numbers
    ("editorLineNumber.foreground", normal(Black)),
    ("editorLineNumber.activeForeground", FG),
    ("editorLineNumber.background", BG),

    // action items and labels
    ("actionItem.background", surface(Input)),
    ("actionItem.foreground", FG),
    ("actionItem.border", surface(Border)),
    ("actionItem.hoverBackground", surface(Hover)),
    ("actionItem.hoverForeground", FG),
    ("actionItem.activeBackground", surface(List)),
    ("actionItem.activeForeground", FG),
    ("actionItem.disabledForeground", normal(Black)),
    ("actionLabel.background", surface(Input)),
    ("actionLabel.foreground", FG),
    ("actionLabel.border", surface(Border)),
    ("actionLabel.hoverBackground", surface(Hover)),
    ("actionLabel.hoverForeground", FG),
    ("actionLabel.activeBackground", surface(List)),
    ("actionLabel.activeForeground", FG),
    ("actionLabel.disabledForeground", normal(Black)),
    ("menuEntry.background", surface(Input)),
    ("menuEntry.foreground", FG),
    ("menuEntry.border", surface(Border)),
    ("menuEntry.hoverBackground", surface(Hover)),
    ("menuEntry.hoverForeground", FG),
    ("menuEntry.activeBackground", surface(List)),
    ("menuEntry.activeForeground", FG),
    ("menuEntry.disabledForeground", normal(Black)),
    ("outlineElement.background", surface(Side)),
    ("outlineElement.foreground", FG),
    ("outlineElement.border", surface(Border)),
    ("outlineElement.hoverBackground", surface(Hover)),
    ("outlineElement.hoverForeground", FG),
    ("outlineElement.activeBackground", surface(List)),
    ("outlineElement.activeForeground", FG),
    ("outlineElement.icon", normal(Blue)),
    ("outlineElement.activeIcon", normal(Cyan)),
    ("outlineElement.inactiveIcon", normal(Black)),

    // codicon elements
    ("codicon.foreground", normal(Blue)),
    ("codicon.activeForeground", normal(Cyan)),
    ("codicon.inactiveForeground", normal(Black)),
    ("codicon.hoverForeground", normal(Cyan)),
    ("codicon.disabledForeground", normal(Black)),
    ("codicon.symbolClass", normal(Cyan)),
    ("codicon.symbolMethod", normal(Green)),
    ("codicon.symbolFunction", normal(Green)),
    ("codicon.symbolVariable", normal(Blue)),
    ("codicon.symbolInterface", normal(Cyan)),
    ("codicon.symbolModule", normal(Cyan)),
    ("codicon.symbolProperty", normal(Blue)),
    ("codicon.symbolEnum", normal(Yellow)),
    ("codicon.symbolKeyword", normal(Magenta)),
    ("codicon.symbolSnippet", normal(Green)),
    ("codicon.symbolColor", normal(Magenta)),
    ("codicon.symbolFile", normal(Cyan)),
    ("codicon.symbolReference", normal(Blue)),
    ("codicon.symbolFolder", normal(Blue)),
    ("codicon.symbolTypeParameter", normal(Cyan)),
    ("codicon.symbolUnit", normal(Yellow)),
    ("codicon.symbolValue", normal(Yellow)),
    ("codicon.symbolStruct", normal(Cyan)),
    ("codicon.symbolEvent", normal(Red)),
    ("codicon.symbolOperator", normal(Red)),

    // icon colors
    ("icon.foreground", normal(Blue)),
    ("icon.activeForeground", normal(Cyan)),
    ("icon.inactiveForeground", normal(Black)),
    ("icon.hoverForeground", normal(Cyan)),
    ("icon.disabledForeground", normal(Black)),
    ("icon.warningForeground", normal(Yellow)),
    ("icon.errorForeground", normal(Red)),
    ("icon.successForeground", normal(Green)),
    ("icon.infoForeground", normal(Blue)),

    // symbol icon theming
    ("symbolIcon.arrayForeground", normal(Yellow)),
    ("symbolIcon.booleanForeground", normal(Blue)),
    ("symbolIcon.classForeground", normal(Cyan)),
    ("symbolIcon.colorForeground", normal(Magenta)),
    ("symbolIcon.constantForeground", normal(Yellow)),
    ("symbolIcon.constructorForeground", normal(Green)),
    ("symbolIcon.enumeratorForeground", normal(Yellow)),
    ("symbolIcon.enumeratorMemberForeground", normal(Blue)),
    ("symbolIcon.eventForeground", normal(Red)),
    ("symbolIcon.fieldForeground", normal(Blue)),
    ("symbolIcon.fileForeground", normal(Cyan)),
    ("symbolIcon.folderForeground", normal(Blue)),
    ("symbolIcon.functionForeground", normal(Green)),
    ("symbolIcon.interfaceForeground", normal(Cyan)),
    ("symbolIcon.keyForeground", normal(Blue)),
    ("symbolIcon.keywordForeground", normal(Magenta)),
    ("symbolIcon.methodForeground", normal(Green)),
    ("symbolIcon.moduleForeground", normal(Cyan)),
    ("symbolIcon.namespaceForeground", normal(Cyan)),
    ("symbolIcon.nullForeground", normal(Red)),
    ("symbolIcon.numberForeground", normal(Yellow)),
    ("symbolIcon.objectForeground", normal(Blue)),
    ("symbolIcon.operatorForeground", normal(Red)),
    ("symbolIcon.packageForeground", normal(Cyan)),
    ("symbolIcon.propertyForeground", normal(Blue)),
    ("symbolIcon.referenceForeground", normal(Blue)),
    ("symbolIcon.snippetForeground", normal(Green)),
    ("symbolIcon.stringForeground", normal(Green)),
    ("symbolIcon.structForeground", normal(Cyan)),
    ("symbolIcon.textForeground", FG),
    ("symbolIcon.typeParameterForeground", normal(Cyan)),
    ("symbolIcon.unitForeground", normal(Yellow)),
    ("symbolIcon.variableForeground", normal(Blue)),

    // debug icons
    ("debugIcon.startForeground", normal(Green)),
    ("debugIcon.pauseForeground", normal(Yellow)),
    ("debugIcon.stopForeground", normal(Red)),
    ("debugIcon.disconnectForeground", normal(Red)),
    ("debugIcon.restartForeground", normal(Green)),
    ("debugIcon.stepOverForeground", normal(Blue)),
    ("debugIcon.stepIntoForeground", normal(Blue)),
    ("debugIcon.stepOutForeground", normal(Blue)),
    ("debugIcon.continueForeground", normal(Green)),
    ("debugIcon.stepBackForeground", normal(Blue)),

    // problem icons
    ("problemsErrorIcon.foreground", normal(Red)),
    ("problemsWarningIcon.foreground", normal(Yellow)),
    ("problemsInfoIcon.foreground", normal(Blue)),

    // tree icons
    ("tree.expandIcon", normal(Blue)),
    ("tree.collapseIcon", normal(Blue)),

    // comments icons
    ("commentsView.resolvedIcon", normal(Green)),
    ("commentsView.unresolvedIcon", normal(Blue)),
];

/// Syntax-highlighting rules, in output order.
pub const TOKEN_RULES: &[(&[&str], Source)] = &[
    (
        &["comment", "punctuation.definition.comment", "comment.line", "comment.block"],
        Source::Normal(Black),
    ),
    (
        &["string", "string.quoted", "string.quoted.single", "string.quoted.double"],
        Source::Normal(Green),
    ),
    (
        &["constant.numeric", "constant.numeric.integer", "constant.numeric.float"],
        Source::Normal(Yellow),
    ),
    (
        &["constant.language", "constant.character", "constant.character.escape"],
        Source::Normal(Red),
    ),
    (
        &["variable", "variable.other", "variable.parameter"],
        Source::Foreground,
    ),
    (
        &["keyword", "storage.type", "storage.modifier", "storage.class"],
        Source::Normal(Magenta),
    ),
    (
        &["entity.name.function", "support.function", "meta.function-call"],
        Source::Normal(Blue),
    ),
    (
        &["entity.name.class", "entity.name.type", "support.class"],
        Source::Normal(Cyan),
    ),
    (&["entity.name.tag", "support.type"], Source::Normal(Green)),
    (
        &["punctuation.definition.string", "punctuation.definition.parameters"],
        Source::Normal(Black),
    ),
];

/// Build the full theme document from a validated palette.
///
/// Pure table evaluation: identical inputs give identical documents.
pub fn assemble(
    theme_name: &str,
    palette: &Palette,
    surfaces: &DerivedSurfaceColors,
) -> ThemeDocument {
    let colors = COLOR_MAP
        .iter()
        .map(|&(key, entry)| {
            let value = match entry {
                Entry::Color(source) => ColorValue::Color(source.resolve(palette, surfaces)),
                Entry::Literal(text) => ColorValue::Literal(text),
            };
            (key, value)
        })
        .collect();

    let rules = TOKEN_RULES
        .iter()
        .map(|&(scopes, source)| HighlightRule {
            scopes: scopes.to_vec(),
            foreground: source.resolve(palette, surfaces),
        })
        .collect();

    ThemeDocument {
        name: theme_name.to_string(),
        colors,
        rules,
    }
}
