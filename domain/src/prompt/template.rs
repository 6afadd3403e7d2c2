//! Prompt templates for the generative fallback

/// Templates for the two fallback modes: a regular answer when no structured
/// source matched, and an apologetic answer after a source failed.
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt when no structured source had an answer
    pub fn answer_system() -> &'static str {
        r#"Sen Batman Üniversitesi Kütüphanesi'nde çalışan Türkçe yanıt veren bir yapay zekâ asistanısın.
Kullanıcı sana herhangi bir konuda soru sorduğunda:

1. Eğer kütüphane ile ilgili genel bir bilgi isteniyorsa, kütüphane hizmetleri, kaynaklar ve çalışma alanları hakkında bilgi ver.
2. Eğer akademik araştırma ile ilgili bir soru ise, araştırma yöntemleri ve kaynak bulma stratejileri öner.
3. Eğer teknik bir sorun bildirildiyse, alternatif çözümler ve iletişim kanalları öner.
4. Her zaman nazik, yardımsever ve profesyonel ol.
5. Cevapların her zaman Türkçe olsun.
6. Bilmediğin bir konu hakkında asla yanlış bilgi verme.
7. Emin olmadığın konularda dürüst ol ve kullanıcıyı doğru kaynaklara yönlendir."#
    }

    /// System prompt after one of the sources failed
    pub fn error_system() -> &'static str {
        r#"Sen Batman Üniversitesi Kütüphanesi'nde çalışan bir yapay zekâ asistanısın.
Şu anda bir hata durumu var ve kullanıcıya yardımcı olman gerekiyor.
Nazik ve yapıcı bir şekilde:
1. Alternatif öneriler sun
2. Başka nasıl yardımcı olabileceğini belirt
3. Gerekirse kütüphane personeline nasıl ulaşabileceklerini açıkla"#
    }

    pub fn system(is_error: bool) -> &'static str {
        if is_error {
            Self::error_system()
        } else {
            Self::answer_system()
        }
    }

    /// User message sent with the system prompt
    ///
    /// In error mode the question is quoted so the model answers about it
    /// rather than treating it as a fresh request.
    pub fn user(query: &str, is_error: bool) -> String {
        if is_error {
            format!("Kullanıcının sorusu: {query}")
        } else {
            query.to_string()
        }
    }

    /// Fixed reply used when the model itself cannot be reached
    pub fn apology() -> &'static str {
        "Şu anda hizmet veremiyorum. Lütfen daha sonra tekrar deneyin veya kütüphane personeliyle iletişime geçin."
    }
}
