//! Music instructions: ACE-Step prose prompts and tag lists

/// Prose prompt for the ACE-Step text-to-music model. Instrumental only.
pub(super) fn ace_step(theme: &str) -> String {
    format!(
        r#"You are creating an instrumental-only song prompt for the text to music ACE-Step model in ComfyUI.
Based on the theme: "{theme}", generate a detailed description following these instructions:
- The song must be purely instrumental. Do not include vocals, lyrics, or singing.
- Describe the mood, genre, and key instruments. Be specific.
- Briefly outline the song's structure.
- Include musical characteristics like tempo (e.g. "allegro", "130 bpm", "slow waltz", "driving", "meditative"), key, and dynamics.
- Use real instruments and stylistic descriptors (e.g. "violin", "minimal techno", "russian psaltery", "fast tempo", "B Flat Major", "psychedelic", "dancefloor", etc.).
- You may include cultural tags (e.g. "tango finlandais", "balkan brass", "japanese koto").
- Avoid overly abstract adjectives unless describing mood (e.g. "dark", "uplifting", "dreamy", "mysterious").
- Write the prompt directly as a continuous block of prose. Do not use labels like "Prompt:".

Example:
A minimal techno track for the dancefloor, at a driving 130 bpm. The mood is dark and hypnotic, led by a pulsating synth bass and a classic 808 drum machine. The structure builds slowly, adding subtle percussive elements and a filtered synth pad that evolves throughout the track, creating a sense of tension and release."#
    )
}

/// Single line of comma-separated tags, nothing else.
pub(super) fn music_tags(theme: &str) -> String {
    format!(
        r#"You are a music tagging expert. Your task is to generate a comma-separated list of keywords based on the user's theme: "{theme}".
The keywords should describe:
- Genre and Subgenre (e.g., "electronic, ambient, downtempo")
- Mood (e.g., "melancholic, introspective, peaceful")
- Key Instruments (e.g., "piano, synth pads, strings, acoustic guitar")
- Musical Characteristics (e.g., "slow tempo, 60 BPM, C minor, soft dynamics, instrumental")
- Cultural/Ethnic Context if relevant (e.g., "celtic, orchestral, japanese folk", "tango finlandais", "balkan brass")
- Tempo or energy descriptors (e.g. "allegro", "130 bpm", "slow waltz", "driving", "meditative")
- Use real instruments and stylistic descriptors (e.g. "violin", "minimal techno", "russian psaltery", "fast tempo", "B Flat Major", "psychedelic", "dancefloor", etc.)
- Avoid overly abstract adjectives unless describing mood (e.g. "dark", "uplifting", "dreamy", "mysterious")

Generate a single line of comma-separated keywords. Do not add any other text or explanation.
Example: minimal techno, dancefloor, 130 bpm, dark, synth bass, drum machine."#
    )
}
